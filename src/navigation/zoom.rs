use crate::core::bounds::Bounds;
use crate::core::constants::{DEFAULT_ZOOM_FACTOR, RESOLUTION_TOLERANCE};
use serde::{Deserialize, Serialize};

/// How an extent is mapped onto the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleMethod {
    /// The whole extent is visible, with margins on one axis
    #[default]
    Fit,
    /// The screen is covered, cropping the extent on one axis
    Fill,
}

impl ScaleMethod {
    /// Resolution at which `extent` fits or fills a `width` x `height` screen
    pub fn resolution(&self, extent: &Bounds, width: f64, height: f64) -> f64 {
        let x = extent.width() / width;
        let y = extent.height() / height;
        match self {
            ScaleMethod::Fit => x.max(y),
            ScaleMethod::Fill => x.min(y),
        }
    }
}

fn usable(resolutions: &[f64]) -> impl Iterator<Item = f64> + '_ {
    resolutions
        .iter()
        .copied()
        .filter(|r| r.is_finite() && *r > 0.0)
}

/// Next level in: the largest listed resolution below `current`,
/// otherwise `current` halved
pub fn zoom_in_resolution(current: f64, resolutions: &[f64]) -> f64 {
    let threshold = current * (1.0 - RESOLUTION_TOLERANCE);
    usable(resolutions)
        .filter(|r| *r < threshold)
        .max_by(f64::total_cmp)
        .unwrap_or(current / DEFAULT_ZOOM_FACTOR)
}

/// Next level out: the smallest listed resolution above `current`,
/// otherwise `current` doubled
pub fn zoom_out_resolution(current: f64, resolutions: &[f64]) -> f64 {
    let threshold = current * (1.0 + RESOLUTION_TOLERANCE);
    usable(resolutions)
        .filter(|r| *r > threshold)
        .min_by(f64::total_cmp)
        .unwrap_or(current * DEFAULT_ZOOM_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_and_fill() {
        let extent = Bounds::from_coords(0.0, 0.0, 400.0, 100.0);
        assert_eq!(ScaleMethod::Fit.resolution(&extent, 200.0, 200.0), 2.0);
        assert_eq!(ScaleMethod::Fill.resolution(&extent, 200.0, 200.0), 0.5);
    }

    #[test]
    fn test_steps_follow_resolution_list() {
        let resolutions = [8.0, 4.0, 2.0, 1.0];
        assert_eq!(zoom_in_resolution(4.0, &resolutions), 2.0);
        assert_eq!(zoom_in_resolution(3.0, &resolutions), 2.0);
        assert_eq!(zoom_out_resolution(4.0, &resolutions), 8.0);
        assert_eq!(zoom_out_resolution(4.0 + 1e-12, &resolutions), 8.0);
    }

    #[test]
    fn test_steps_fall_back_to_factor() {
        assert_eq!(zoom_in_resolution(4.0, &[]), 2.0);
        assert_eq!(zoom_out_resolution(4.0, &[]), 8.0);
        // past the last level
        assert_eq!(zoom_in_resolution(1.0, &[8.0, 4.0, 2.0, 1.0]), 0.5);
        assert_eq!(zoom_out_resolution(8.0, &[1.0, 8.0, f64::NAN]), 16.0);
    }
}
