use crate::core::bounds::Bounds;
use serde::{Deserialize, Serialize};

/// The map-level constraints a viewport is navigated under
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapOptions {
    /// Discrete zoom levels as world units per pixel, typically largest first
    pub resolutions: Vec<f64>,
    /// Full extent of the map data
    pub extent: Option<Bounds>,
    pub pan_lock: bool,
    pub zoom_lock: bool,
    pub rotation_lock: bool,
}

impl MapOptions {
    pub fn new(resolutions: Vec<f64>, extent: Option<Bounds>) -> Self {
        Self {
            resolutions,
            extent,
            ..Self::default()
        }
    }

    /// Web-mercator style pyramid: `levels` resolutions, halving from `top`
    pub fn with_resolution_pyramid(top: f64, levels: usize, extent: Option<Bounds>) -> Self {
        let resolutions = (0..levels).map(|level| top / 2_f64.powi(level as i32)).collect();
        Self::new(resolutions, extent)
    }

    pub fn pan_lock(mut self, locked: bool) -> Self {
        self.pan_lock = locked;
        self
    }

    pub fn zoom_lock(mut self, locked: bool) -> Self {
        self.zoom_lock = locked;
        self
    }

    pub fn rotation_lock(mut self, locked: bool) -> Self {
        self.rotation_lock = locked;
        self
    }
}
