//! # mapnav
//!
//! Viewport and navigation core for 2D maps.
//!
//! A [`Viewport`] converts between screen pixels and a zoomable, rotatable
//! world plane. A [`LimitedViewport`] wraps it with map lock flags and an
//! injectable [`Limiter`]. A [`Navigator`] moves either of them with
//! immediate jumps or tick-driven animations (pan, zoom, rotate, fly-to and
//! fling) and reports whether each change was discrete or continuous.
//!
//! The crate owns no clock and no threads: the host render loop calls
//! [`Navigator::update_animations`] once per frame with the elapsed time.

pub mod animation;
pub mod core;
pub mod navigation;
pub mod prelude;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::{Bounds, Quad},
    config::{FlingConfig, NavigationProfile, NavigatorConfig},
    geo::Point,
    limited_viewport::LimitedViewport,
    limiter::{CenterLimiter, KeepWithinLimiter, Limiter, UnlimitedLimiter, ZoomLimits},
    map::MapOptions,
    viewport::{Viewport, ViewportChange, ViewportState},
};

pub use crate::animation::{
    engine::{Animate, Animation, AnimationEntry, TickOutcome},
    interpolation::EasingFunction,
};

pub use crate::navigation::{ChangeType, Navigator, ScaleMethod, ViewportAnimation};

pub use crate::traits::ViewportControl;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Index {index} out of range for {len} ordinates")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
