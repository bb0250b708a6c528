//! Prelude module for common mapnav types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapnav::prelude::*;`

pub use crate::core::{
    bounds::{Bounds, Quad},
    config::{FlingConfig, NavigationProfile, NavigatorConfig},
    geo::Point,
    limited_viewport::LimitedViewport,
    limiter::{CenterLimiter, KeepWithinLimiter, Limiter, UnlimitedLimiter, ZoomLimits},
    map::MapOptions,
    viewport::{Viewport, ViewportChange, ViewportState},
};

pub use crate::animation::interpolation::EasingFunction;

pub use crate::navigation::{ChangeType, Navigator, ScaleMethod};

pub use crate::traits::ViewportControl;

pub use crate::{MapError, Result};
