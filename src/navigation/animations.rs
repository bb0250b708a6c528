//! Viewport animation kinds driven by the navigator
//!
//! Each variant carries typed start and end values and knows how to apply
//! itself to anything implementing [`ViewportControl`].

use crate::animation::engine::{Animate, TickOutcome};
use crate::animation::interpolation::Interpolation;
use crate::core::geo::Point;
use crate::core::viewport::normalize_rotation;
use crate::traits::ViewportControl;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportAnimation {
    Center {
        start: Point,
        end: Point,
    },
    Resolution {
        start: f64,
        end: f64,
    },
    /// `delta` is the signed shortest turn from `start` to `end`, in `(-180, 180]`
    Rotation {
        start: f64,
        end: f64,
        delta: f64,
    },
    /// Decaying screen-space velocity in pixels per second
    Fling {
        velocity: Point,
        frame_secs: f64,
    },
}

impl ViewportAnimation {
    pub fn center(start: Point, end: Point) -> Self {
        Self::Center { start, end }
    }

    pub fn resolution(start: f64, end: f64) -> Self {
        Self::Resolution { start, end }
    }

    /// Rotation along the shortest path, crossing 0/360 when that is shorter
    pub fn rotation(start: f64, end: f64) -> Self {
        let start = normalize_rotation(start);
        let end = normalize_rotation(end);
        Self::Rotation {
            start,
            end,
            delta: shortest_turn(start, end),
        }
    }

    /// Momentum pan; `velocity` already points the way the center moves
    pub fn fling(velocity: Point, frame: Duration) -> Self {
        Self::Fling {
            velocity,
            frame_secs: frame.as_secs_f64(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Center { .. } => "center",
            Self::Resolution { .. } => "resolution",
            Self::Rotation { .. } => "rotation",
            Self::Fling { .. } => "fling",
        }
    }
}

/// Signed difference `end - start` wrapped into `(-180, 180]`
pub fn shortest_turn(start: f64, end: f64) -> f64 {
    let delta = (end - start).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

fn set_center<V: ViewportControl + ?Sized>(target: &mut V, center: Point) -> bool {
    let before = target.viewport().center();
    if before == center {
        return false;
    }
    target.set_center(center);
    target.viewport().center() != before
}

fn set_resolution<V: ViewportControl + ?Sized>(target: &mut V, resolution: f64) -> bool {
    let before = target.viewport().resolution();
    if before == resolution {
        return false;
    }
    target.set_resolution(resolution);
    target.viewport().resolution() != before
}

fn set_rotation<V: ViewportControl + ?Sized>(target: &mut V, rotation: f64) -> bool {
    let before = target.viewport().rotation();
    if before == normalize_rotation(rotation) {
        return false;
    }
    target.set_rotation(rotation);
    target.viewport().rotation() != before
}

fn outcome(changed: bool) -> TickOutcome {
    if changed {
        TickOutcome::Changed
    } else {
        TickOutcome::Unchanged
    }
}

impl<V: ViewportControl + ?Sized> Animate<V> for ViewportAnimation {
    fn tick(&mut self, target: &mut V, progress: f64) -> TickOutcome {
        match *self {
            Self::Center { start, end } => {
                outcome(set_center(target, Interpolation::point(&start, &end, progress)))
            }
            Self::Resolution { start, end } => {
                outcome(set_resolution(target, Interpolation::linear(start, end, progress)))
            }
            Self::Rotation { start, delta, .. } => {
                outcome(set_rotation(target, start + delta * progress))
            }
            Self::Fling {
                velocity,
                frame_secs,
            } => {
                let movement = velocity.multiply((1.0 - progress) * frame_secs);
                let rounded = movement.round();
                if rounded.x == 0.0 && rounded.y == 0.0 {
                    return TickOutcome::Completed;
                }

                let viewport = target.viewport();
                let origin = viewport.screen_to_world(&Point::new(0.0, 0.0));
                let shift = viewport.screen_to_world(&movement).subtract(&origin);
                let center = viewport.center().add(&shift);
                log::trace!("fling step {:?} px -> {:?}", movement, shift);
                outcome(set_center(target, center))
            }
        }
    }

    fn finish(&mut self, target: &mut V) -> bool {
        match *self {
            Self::Center { end, .. } => set_center(target, end),
            Self::Resolution { end, .. } => set_resolution(target, end),
            Self::Rotation { end, .. } => set_rotation(target, end),
            // momentum has no end value to snap to
            Self::Fling { .. } => false,
        }
    }
}
