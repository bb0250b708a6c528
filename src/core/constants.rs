//! Core constants for viewport math and navigation defaults.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Rotations closer than this to 0 or 360 degrees count as unrotated.
pub const ROTATION_EPSILON: f64 = 1e-9;

/// One animation frame at 60 fps, in milliseconds.
pub const FRAME_MS: u64 = 16;

/// Duration used by navigator calls that do not pass one.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Default length of a fly-to animation.
pub const DEFAULT_FLY_TO_DURATION_MS: u64 = 2000;

/// Fling gestures slower than this (pixels per second) are ignored.
pub const FLING_MIN_VELOCITY: f64 = 100.0;

/// Fling duration in milliseconds is the velocity magnitude divided by this.
pub const FLING_VELOCITY_DIVISOR: f64 = 10.0;

/// Zoom step used when the map has no resolution list to step through.
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Relative tolerance when comparing resolutions against a resolution list.
pub const RESOLUTION_TOLERANCE: f64 = 1e-9;
