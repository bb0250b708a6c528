//! Shared trait abstractions
//!
//! [`ViewportControl`] is the seam between the navigator and whatever owns
//! the viewport state: a bare [`Viewport`] or a policy-enforcing
//! [`LimitedViewport`](crate::core::limited_viewport::LimitedViewport).

use crate::core::{geo::Point, map::MapOptions, viewport::Viewport};

/// Read access plus the mutations a navigator performs on a viewport
pub trait ViewportControl {
    /// Current viewport state and transforms
    fn viewport(&self) -> &Viewport;

    fn set_center(&mut self, center: Point);

    fn set_resolution(&mut self, resolution: f64);

    fn set_rotation(&mut self, rotation: f64);

    fn set_size(&mut self, width: f64, height: f64);

    /// Combined pan, zoom and rotate gesture step, see [`Viewport::transform`]
    fn transform(
        &mut self,
        position: &Point,
        previous: &Point,
        delta_resolution: f64,
        delta_rotation: f64,
    );

    /// Map constraints this viewport is navigated under, if any
    fn map(&self) -> Option<&MapOptions> {
        None
    }
}

impl ViewportControl for Viewport {
    fn viewport(&self) -> &Viewport {
        self
    }

    fn set_center(&mut self, center: Point) {
        Viewport::set_center(self, center)
    }

    fn set_resolution(&mut self, resolution: f64) {
        Viewport::set_resolution(self, resolution)
    }

    fn set_rotation(&mut self, rotation: f64) {
        Viewport::set_rotation(self, rotation)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        Viewport::set_size(self, width, height)
    }

    fn transform(
        &mut self,
        position: &Point,
        previous: &Point,
        delta_resolution: f64,
        delta_rotation: f64,
    ) {
        Viewport::transform(self, position, previous, delta_resolution, delta_rotation)
    }
}
