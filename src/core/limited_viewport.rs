use crate::core::bounds::Bounds;
use crate::core::geo::Point;
use crate::core::limiter::{CenterLimiter, Limiter};
use crate::core::map::MapOptions;
use crate::core::viewport::{Viewport, ViewportChange};
use crate::traits::ViewportControl;
use crossbeam_channel::Receiver;

/// A viewport that honors map lock flags and a [`Limiter`] on every mutation
///
/// Without map options attached the zoom is locked and nothing is limited.
#[derive(Debug)]
pub struct LimitedViewport {
    viewport: Viewport,
    map: Option<MapOptions>,
    limiter: Box<dyn Limiter>,
}

impl LimitedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            map: None,
            limiter: Box::new(CenterLimiter::default()),
        }
    }

    pub fn with_map(mut self, map: MapOptions) -> Self {
        self.set_map(Some(map));
        self
    }

    pub fn with_limiter(mut self, limiter: impl Limiter + 'static) -> Self {
        self.set_limiter(Box::new(limiter));
        self
    }

    /// Attaches (or detaches) map options and re-applies the limits
    pub fn set_map(&mut self, map: Option<MapOptions>) {
        self.map = map;
        self.apply_limits();
    }

    pub fn map_mut(&mut self) -> Option<&mut MapOptions> {
        self.map.as_mut()
    }

    pub fn set_limiter(&mut self, limiter: Box<dyn Limiter>) {
        self.limiter = limiter;
        self.apply_limits();
    }

    pub fn limiter(&self) -> &dyn Limiter {
        self.limiter.as_ref()
    }

    pub fn subscribe(&mut self) -> Receiver<ViewportChange> {
        self.viewport.subscribe()
    }

    pub fn into_inner(self) -> Viewport {
        self.viewport
    }

    fn pan_locked(&self) -> bool {
        self.map.as_ref().map_or(false, |map| map.pan_lock)
    }

    fn zoom_locked(&self) -> bool {
        self.map.as_ref().map_or(true, |map| map.zoom_lock)
    }

    fn rotation_locked(&self) -> bool {
        self.map.as_ref().map_or(false, |map| map.rotation_lock)
    }

    fn resolutions(&self) -> &[f64] {
        self.map.as_ref().map_or(&[][..], |map| map.resolutions.as_slice())
    }

    fn map_extent(&self) -> Option<Bounds> {
        self.map.as_ref().and_then(|map| map.extent)
    }

    fn apply_limits(&mut self) {
        if !self.viewport.has_size() {
            return;
        }
        let resolutions = self.map.as_ref().map_or(&[][..], |map| map.resolutions.as_slice());
        let extent = self.map.as_ref().and_then(|map| map.extent.as_ref());
        self.limiter.limit(&mut self.viewport, resolutions, extent);
    }

    fn limit_extent(&mut self) {
        let extent = self.map_extent();
        self.limiter.limit_extent(&mut self.viewport, extent.as_ref());
    }
}

impl ViewportControl for LimitedViewport {
    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn set_center(&mut self, center: Point) {
        if self.pan_locked() {
            return;
        }
        self.viewport.set_center(center);
        self.limit_extent();
    }

    fn set_resolution(&mut self, resolution: f64) {
        if self.zoom_locked() {
            return;
        }
        let limited = self.limiter.limit_resolution(
            resolution,
            self.viewport.width(),
            self.viewport.height(),
            self.resolutions(),
            self.map_extent().as_ref(),
        );
        self.viewport.set_resolution(limited);
    }

    fn set_rotation(&mut self, rotation: f64) {
        if self.rotation_locked() {
            return;
        }
        self.viewport.set_rotation(rotation);
        self.limit_extent();
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
        if self.viewport.has_size() {
            self.limit_extent();
        }
    }

    fn transform(
        &mut self,
        position: &Point,
        previous: &Point,
        delta_resolution: f64,
        delta_rotation: f64,
    ) {
        let delta_resolution = if self.zoom_locked() { 1.0 } else { delta_resolution };
        let delta_rotation = if self.rotation_locked() { 0.0 } else { delta_rotation };
        let position = if self.pan_locked() { previous } else { position };

        self.viewport
            .transform(position, previous, delta_resolution, delta_rotation);
        self.apply_limits();
    }

    fn map(&self) -> Option<&MapOptions> {
        self.map.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::limiter::{KeepWithinLimiter, UnlimitedLimiter};

    fn limited(map: MapOptions) -> LimitedViewport {
        LimitedViewport::new(Viewport::new(Point::new(0.0, 0.0), 4.0, 100.0, 100.0))
            .with_map(map)
            .with_limiter(UnlimitedLimiter)
    }

    #[test]
    fn test_zoom_locked_without_map() {
        let mut viewport = LimitedViewport::new(Viewport::new(Point::default(), 4.0, 100.0, 100.0));
        viewport.set_resolution(1.0);
        assert_eq!(viewport.viewport().resolution(), 4.0);

        viewport.set_center(Point::new(3.0, 3.0));
        assert_eq!(viewport.viewport().center(), Point::new(3.0, 3.0));
    }

    #[test]
    fn test_pan_lock_ignores_center_and_drag() {
        let mut viewport = limited(MapOptions::default().pan_lock(true));
        viewport.set_center(Point::new(50.0, 50.0));
        assert_eq!(viewport.viewport().center(), Point::new(0.0, 0.0));

        viewport.transform(&Point::new(80.0, 80.0), &Point::new(50.0, 50.0), 1.0, 0.0);
        assert_eq!(viewport.viewport().center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_pan_lock_still_allows_zoom_around_previous_position() {
        let mut viewport = limited(MapOptions::default().pan_lock(true));
        viewport.transform(&Point::new(80.0, 80.0), &Point::new(50.0, 50.0), 2.0, 0.0);
        assert_eq!(viewport.viewport().resolution(), 2.0);
        assert_eq!(viewport.viewport().center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_zoom_lock_neutralizes_pinch() {
        let mut viewport = limited(MapOptions::default().zoom_lock(true));
        viewport.transform(&Point::new(60.0, 50.0), &Point::new(50.0, 50.0), 3.0, 0.0);
        assert_eq!(viewport.viewport().resolution(), 4.0);
        assert_eq!(viewport.viewport().center(), Point::new(-40.0, 0.0));

        viewport.set_resolution(1.0);
        assert_eq!(viewport.viewport().resolution(), 4.0);
    }

    #[test]
    fn test_rotation_lock() {
        let mut viewport = limited(MapOptions::default().rotation_lock(true));
        viewport.set_rotation(45.0);
        viewport.transform(&Point::new(50.0, 50.0), &Point::new(50.0, 50.0), 1.0, 30.0);
        assert_eq!(viewport.viewport().rotation(), 0.0);
    }

    #[test]
    fn test_limiter_applied_after_mutations() {
        let map = MapOptions::new(
            vec![8.0, 4.0, 2.0, 1.0],
            Some(Bounds::from_coords(-100.0, -100.0, 100.0, 100.0)),
        );
        let mut viewport = LimitedViewport::new(Viewport::new(Point::default(), 4.0, 100.0, 100.0))
            .with_map(map);

        viewport.set_center(Point::new(500.0, 0.0));
        assert_eq!(viewport.viewport().center(), Point::new(100.0, 0.0));

        viewport.set_resolution(0.01);
        assert_eq!(viewport.viewport().resolution(), 1.0);

        // dragging far to the left pushes the center past the right edge
        viewport.transform(&Point::new(0.0, 50.0), &Point::new(100.0, 50.0), 1.0, 0.0);
        assert_eq!(viewport.viewport().center(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_attaching_map_applies_limits() {
        let mut viewport = LimitedViewport::new(Viewport::new(Point::new(1e6, 0.0), 50.0, 100.0, 100.0));
        viewport.set_map(Some(MapOptions::new(
            vec![4.0, 2.0],
            Some(Bounds::from_coords(0.0, 0.0, 10.0, 10.0)),
        )));
        assert_eq!(viewport.viewport().center(), Point::new(10.0, 0.0));
        assert_eq!(viewport.viewport().resolution(), 4.0);
    }

    #[test]
    fn test_notifications_forwarded() {
        let mut viewport = limited(MapOptions::default());
        let rx = viewport.subscribe();
        viewport.set_rotation(10.0);
        assert_eq!(rx.try_recv().unwrap(), ViewportChange::Rotation);
    }

    #[test]
    fn test_rotation_relimits_extent() {
        let bounds = Bounds::from_coords(-60.0, -60.0, 60.0, 60.0);
        let mut viewport = LimitedViewport::new(Viewport::new(Point::new(0.0, 30.0), 1.0, 100.0, 50.0))
            .with_map(MapOptions::new(Vec::new(), Some(bounds)))
            .with_limiter(KeepWithinLimiter::new());
        // unrotated the 100x50 window fits
        assert_eq!(viewport.viewport().center(), Point::new(0.0, 30.0));

        // a quarter turn makes it 50x100 and pushes the top past the bounds
        viewport.set_rotation(90.0);
        let center = viewport.viewport().center();
        assert!((center.y - 10.0).abs() < 1e-9, "{:?}", center);
        assert!(bounds.expanded(1e-9).contains_bounds(&viewport.viewport().extent()));
    }

    #[test]
    fn test_size_relimits_extent_once_sized() {
        let mut viewport = LimitedViewport::new(Viewport::new(Point::new(500.0, 0.0), 1.0, 0.0, 0.0))
            .with_map(MapOptions::new(
                Vec::new(),
                Some(Bounds::from_coords(-100.0, -100.0, 100.0, 100.0)),
            ));
        assert_eq!(viewport.viewport().center(), Point::new(500.0, 0.0));

        viewport.set_size(0.0, 0.0);
        assert_eq!(viewport.viewport().center(), Point::new(500.0, 0.0));

        viewport.set_size(100.0, 100.0);
        assert_eq!(viewport.viewport().center(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_map_extent_with_swapped_corners() {
        let map = MapOptions::new(
            vec![8.0, 4.0, 2.0, 1.0],
            Some(Bounds::from_coords(100.0, 100.0, -100.0, -100.0)),
        );
        let mut viewport = LimitedViewport::new(Viewport::new(Point::new(500.0, 0.0), 4.0, 100.0, 100.0))
            .with_map(map);
        assert_eq!(viewport.viewport().center(), Point::new(100.0, 0.0));

        viewport.set_center(Point::new(-300.0, -300.0));
        assert_eq!(viewport.viewport().center(), Point::new(-100.0, -100.0));
    }
}
