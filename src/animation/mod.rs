pub mod engine;
pub mod interpolation;

// Re-export commonly used types for convenience
pub use engine::{Animate, Animation, AnimationEntry, AnimationState, AnimationUpdate, TickOutcome};
pub use interpolation::{EasingFunction, Interpolatable, Interpolation};
