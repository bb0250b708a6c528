//! Pluggable strategies that keep a viewport inside map constraints
//!
//! A [`Limiter`] receives a proposed viewport state together with the map's
//! resolution list and extent, and corrects it. [`UnlimitedLimiter`] allows
//! anything, [`CenterLimiter`] keeps the center over the map and the
//! resolution within the known zoom range, and [`KeepWithinLimiter`] keeps
//! the whole visible extent inside the map.

use crate::core::bounds::Bounds;
use crate::core::geo::Point;
use crate::core::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Allowed resolution range in world units per pixel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawZoomLimits")]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

#[derive(Deserialize)]
struct RawZoomLimits {
    min: f64,
    max: f64,
}

impl From<RawZoomLimits> for ZoomLimits {
    fn from(raw: RawZoomLimits) -> Self {
        ZoomLimits::new(raw.min, raw.max)
    }
}

impl ZoomLimits {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Range spanned by a resolution list, `None` when it has no finite entry
    pub fn from_resolutions(resolutions: &[f64]) -> Option<Self> {
        let mut finite = resolutions.iter().copied().filter(|r| r.is_finite());
        let first = finite.next()?;
        Some(finite.fold(Self::new(first, first), |limits, r| {
            Self::new(limits.min.min(r), limits.max.max(r))
        }))
    }

    /// Never panics, even on limits assigned out of order
    pub fn clamp(&self, resolution: f64) -> f64 {
        let ordered = ZoomLimits::new(self.min, self.max);
        resolution.max(ordered.min).min(ordered.max)
    }
}

/// Corrects viewport state against map constraints
pub trait Limiter: Debug {
    /// Applies both resolution and extent limits to the viewport
    fn limit(&self, viewport: &mut Viewport, resolutions: &[f64], extent: Option<&Bounds>) {
        let limited = self.limit_resolution(
            viewport.resolution(),
            viewport.width(),
            viewport.height(),
            resolutions,
            extent,
        );
        if limited != viewport.resolution() {
            viewport.set_resolution(limited);
        }
        self.limit_extent(viewport, extent);
    }

    /// Moves the viewport center so its extent respects the limits
    fn limit_extent(&self, viewport: &mut Viewport, extent: Option<&Bounds>);

    /// Returns the allowed resolution closest to `resolution`
    fn limit_resolution(
        &self,
        resolution: f64,
        width: f64,
        height: f64,
        resolutions: &[f64],
        extent: Option<&Bounds>,
    ) -> f64;
}

/// Entry of `resolutions` closest to `resolution` on a logarithmic scale
pub fn nearest_resolution(resolution: f64, resolutions: &[f64]) -> Option<f64> {
    resolutions
        .iter()
        .copied()
        .filter(|r| r.is_finite() && *r > 0.0)
        .min_by(|a, b| {
            let da = (resolution / a).ln().abs();
            let db = (resolution / b).ln().abs();
            da.total_cmp(&db)
        })
}

/// No restrictions at all
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlimitedLimiter;

impl Limiter for UnlimitedLimiter {
    fn limit_extent(&self, _viewport: &mut Viewport, _extent: Option<&Bounds>) {}

    fn limit_resolution(
        &self,
        resolution: f64,
        _width: f64,
        _height: f64,
        _resolutions: &[f64],
        _extent: Option<&Bounds>,
    ) -> f64 {
        resolution
    }
}

/// Keeps the center inside the pan bounds and the resolution inside the zoom range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterLimiter {
    /// Overrides the range derived from the map resolutions
    pub zoom_limits: Option<ZoomLimits>,
    /// Overrides the map extent as the area the center may move in
    pub pan_limits: Option<Bounds>,
    /// Snap to the nearest entry of the map resolutions before clamping
    pub snap_to_resolutions: bool,
}

impl CenterLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.zoom_limits = Some(limits);
        self
    }

    pub fn with_pan_limits(mut self, bounds: Bounds) -> Self {
        self.pan_limits = Some(bounds);
        self
    }

    pub fn snapping(mut self, snap: bool) -> Self {
        self.snap_to_resolutions = snap;
        self
    }
}

impl Limiter for CenterLimiter {
    fn limit_extent(&self, viewport: &mut Viewport, extent: Option<&Bounds>) {
        let Some(bounds) = self.pan_limits.as_ref().or(extent) else {
            return;
        };
        let center = viewport.center();
        let clamped = bounds.clamp(&center);
        if clamped != center {
            viewport.set_center(clamped);
        }
    }

    fn limit_resolution(
        &self,
        resolution: f64,
        _width: f64,
        _height: f64,
        resolutions: &[f64],
        _extent: Option<&Bounds>,
    ) -> f64 {
        let resolution = snap(resolution, resolutions, self.snap_to_resolutions);
        match self.zoom_limits.or_else(|| ZoomLimits::from_resolutions(resolutions)) {
            Some(limits) => limits.clamp(resolution),
            None => resolution,
        }
    }
}

/// Keeps the whole visible extent inside the pan bounds
///
/// The largest allowed resolution is the one at which the pan bounds just
/// fill the screen. When the view is still larger than the bounds on an
/// axis (for example while rotated) it is centered on that axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeepWithinLimiter {
    /// Overrides the map extent as the area to stay within
    pub pan_limits: Option<Bounds>,
    pub snap_to_resolutions: bool,
}

impl KeepWithinLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pan_limits(mut self, bounds: Bounds) -> Self {
        self.pan_limits = Some(bounds);
        self
    }

    pub fn snapping(mut self, snap: bool) -> Self {
        self.snap_to_resolutions = snap;
        self
    }
}

impl Limiter for KeepWithinLimiter {
    fn limit_extent(&self, viewport: &mut Viewport, extent: Option<&Bounds>) {
        let Some(bounds) = self.pan_limits.as_ref().or(extent) else {
            return;
        };
        if !viewport.has_size() {
            return;
        }
        let view = viewport.extent();
        let center = viewport.center();
        let shifted = Point::new(
            center.x + axis_shift(view.min.x, view.max.x, bounds.min.x, bounds.max.x),
            center.y + axis_shift(view.min.y, view.max.y, bounds.min.y, bounds.max.y),
        );
        if shifted != center {
            viewport.set_center(shifted);
        }
    }

    fn limit_resolution(
        &self,
        resolution: f64,
        width: f64,
        height: f64,
        resolutions: &[f64],
        extent: Option<&Bounds>,
    ) -> f64 {
        let resolution = snap(resolution, resolutions, self.snap_to_resolutions);
        let Some(bounds) = self.pan_limits.as_ref().or(extent) else {
            return resolution;
        };
        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            return resolution;
        }

        let max = (bounds.width() / width).min(bounds.height() / height);
        let min = ZoomLimits::from_resolutions(resolutions)
            .map(|limits| limits.min)
            .unwrap_or(0.0)
            .min(max);
        ZoomLimits::new(min, max).clamp(resolution)
    }
}

fn snap(resolution: f64, resolutions: &[f64], enabled: bool) -> f64 {
    if !enabled {
        return resolution;
    }
    nearest_resolution(resolution, resolutions).unwrap_or(resolution)
}

/// Offset that moves `[view_min, view_max]` inside `[min, max]`, centering it
/// when it does not fit
fn axis_shift(view_min: f64, view_max: f64, min: f64, max: f64) -> f64 {
    if view_max - view_min >= max - min {
        (min + max) / 2.0 - (view_min + view_max) / 2.0
    } else if view_min < min {
        min - view_min
    } else if view_max > max {
        max - view_max
    } else {
        0.0
    }
}
