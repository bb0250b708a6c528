use crate::core::bounds::{Bounds, Quad};
use crate::core::constants::ROTATION_EPSILON;
use crate::core::geo::Point;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// The authoritative view descriptor: where the screen looks at the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// World coordinates of the screen center
    pub center: Point,
    /// World units per screen pixel
    pub resolution: f64,
    /// Rotation in degrees, normalized to `[0, 360)`
    pub rotation: f64,
    /// Screen width in pixels
    pub width: f64,
    /// Screen height in pixels
    pub height: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center: Point::default(),
            resolution: 1.0,
            rotation: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Property of a [`Viewport`] reported to change subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportChange {
    Center,
    Resolution,
    Rotation,
    Size,
}

impl ViewportChange {
    pub fn name(&self) -> &'static str {
        match self {
            ViewportChange::Center => "Center",
            ViewportChange::Resolution => "Resolution",
            ViewportChange::Rotation => "Rotation",
            ViewportChange::Size => "Size",
        }
    }
}

/// Derived extents, valid for the state they were computed from
#[derive(Debug, Clone, Copy, PartialEq)]
struct ExtentCache {
    extent: Bounds,
    window: Quad,
}

/// Normalizes degrees into `[0, 360)`
pub fn normalize_rotation(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Converts between screen pixels and a rotatable, zoomable world plane
///
/// Resolution must stay positive and finite; this type does not check it.
#[derive(Debug, Clone)]
pub struct Viewport {
    state: ViewportState,
    /// `None` marks the derived extents dirty
    cache: Cell<Option<ExtentCache>>,
    listeners: Vec<Sender<ViewportChange>>,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: Point, resolution: f64, width: f64, height: f64) -> Self {
        Self::from_state(ViewportState {
            center,
            resolution,
            rotation: 0.0,
            width,
            height,
        })
    }

    pub fn from_state(state: ViewportState) -> Self {
        Self {
            state: ViewportState {
                rotation: normalize_rotation(state.rotation),
                ..state
            },
            cache: Cell::new(None),
            listeners: Vec::new(),
        }
    }

    /// Creates a viewport of the given screen size that shows `extent`
    /// centered, at the resolution that makes it fit
    pub fn from_extent(extent: &Bounds, width: f64, height: f64) -> Self {
        let resolution = (extent.width() / width).max(extent.height() / height);
        Self::new(extent.center(), resolution, width, height)
    }

    /// Registers a subscriber that receives every property change
    pub fn subscribe(&mut self) -> Receiver<ViewportChange> {
        let (tx, rx) = unbounded();
        self.listeners.push(tx);
        rx
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn center(&self) -> Point {
        self.state.center
    }

    pub fn resolution(&self) -> f64 {
        self.state.resolution
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    pub fn width(&self) -> f64 {
        self.state.width
    }

    pub fn height(&self) -> f64 {
        self.state.height
    }

    /// True when both screen dimensions are finite and non-zero
    pub fn has_size(&self) -> bool {
        let usable = |v: f64| v.is_finite() && v != 0.0;
        usable(self.state.width) && usable(self.state.height)
    }

    pub fn is_rotated(&self) -> bool {
        let rotation = self.state.rotation;
        !rotation.is_nan() && rotation > ROTATION_EPSILON && rotation < 360.0 - ROTATION_EPSILON
    }

    /// Screen center in pixels
    pub fn screen_center(&self) -> Point {
        Point::new(self.state.width / 2.0, self.state.height / 2.0)
    }

    /// Axis-aligned world rectangle covering the whole (possibly rotated) window
    pub fn extent(&self) -> Bounds {
        self.extents().extent
    }

    /// World-space corners of the visible window
    pub fn window_extent(&self) -> Quad {
        self.extents().window
    }

    pub fn set_center(&mut self, center: Point) {
        self.state.center = center;
        self.changed(ViewportChange::Center);
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.state.resolution = resolution;
        self.changed(ViewportChange::Resolution);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.state.rotation = normalize_rotation(rotation);
        self.changed(ViewportChange::Rotation);
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.state.width = width;
        self.state.height = height;
        self.changed(ViewportChange::Size);
    }

    /// Replaces the whole state, notifying once per property that differs
    pub fn set_state(&mut self, state: ViewportState) {
        let previous = self.state;
        if state.center != previous.center {
            self.set_center(state.center);
        }
        if state.resolution != previous.resolution {
            self.set_resolution(state.resolution);
        }
        if normalize_rotation(state.rotation) != previous.rotation {
            self.set_rotation(state.rotation);
        }
        if state.width != previous.width || state.height != previous.height {
            self.set_size(state.width, state.height);
        }
    }

    /// Converts a world coordinate to screen pixels
    pub fn world_to_screen(&self, world: &Point) -> Point {
        let ViewportState {
            center, resolution, ..
        } = self.state;
        let screen_center = self.screen_center();
        let screen = Point::new(
            (world.x - center.x) / resolution + screen_center.x,
            (center.y - world.y) / resolution + screen_center.y,
        );
        if self.is_rotated() {
            screen.rotate_about(-self.state.rotation, &screen_center)
        } else {
            screen
        }
    }

    /// Converts screen pixels back to a world coordinate
    pub fn screen_to_world(&self, screen: &Point) -> Point {
        let screen_center = self.screen_center();
        let screen = if self.is_rotated() {
            screen.rotate_about(self.state.rotation, &screen_center)
        } else {
            *screen
        };
        let ViewportState {
            center, resolution, ..
        } = self.state;
        Point::new(
            center.x + (screen.x - screen_center.x) * resolution,
            center.y - (screen.y - screen_center.y) * resolution,
        )
    }

    /// Combined pan, zoom and rotate gesture step.
    ///
    /// Pans so the world point under `previous` moves under `position`, then
    /// divides the resolution by `delta_resolution` keeping the point under
    /// `position` fixed, then adds `delta_rotation` degrees keeping that point
    /// fixed again. Each step reads the center left by the step before.
    pub fn transform(
        &mut self,
        position: &Point,
        previous: &Point,
        delta_resolution: f64,
        delta_rotation: f64,
    ) {
        let previous_world = self.screen_to_world(previous);
        let current_world = self.screen_to_world(position);
        let panned = self.state.center.add(&previous_world.subtract(&current_world));
        self.set_center(panned);

        if delta_resolution != 1.0 {
            let anchor = self.screen_to_world(position);
            let old_resolution = self.state.resolution;
            self.set_resolution(old_resolution / delta_resolution);
            let ratio = self.state.resolution / old_resolution;
            let offset = anchor.subtract(&self.state.center).multiply(ratio);
            self.set_center(anchor.subtract(&offset));
        }

        if delta_rotation != 0.0 {
            let before = self.screen_to_world(position);
            self.set_rotation(self.state.rotation + delta_rotation);
            let after = self.screen_to_world(position);
            let corrected = self.state.center.subtract(&after.subtract(&before));
            self.set_center(corrected);
        }
    }

    fn changed(&mut self, change: ViewportChange) {
        self.cache.set(None);
        self.listeners.retain(|tx| tx.send(change).is_ok());
    }

    fn extents(&self) -> ExtentCache {
        if let Some(cache) = self.cache.get() {
            return cache;
        }
        let cache = self.compute_extents();
        self.cache.set(Some(cache));
        cache
    }

    fn compute_extents(&self) -> ExtentCache {
        let ViewportState {
            center,
            resolution,
            width,
            height,
            ..
        } = self.state;
        let unrotated = Bounds::from_center_and_size(center, width * resolution, height * resolution);
        let window = Quad::from_bounds(&unrotated);

        if !self.is_rotated() {
            return ExtentCache {
                extent: unrotated,
                window,
            };
        }

        let window = window.rotate_about(-self.state.rotation, &center);
        ExtentCache {
            extent: window.to_bounding_box(),
            window,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_state(ViewportState::default())
    }
}
