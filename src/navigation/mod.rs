pub mod animations;
pub mod navigator;
pub mod zoom;

pub use animations::ViewportAnimation;
pub use navigator::{ChangeType, Navigator};
pub use zoom::{zoom_in_resolution, zoom_out_resolution, ScaleMethod};
