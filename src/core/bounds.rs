use crate::core::geo::Point;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of ordinates carried by a [`Bounds`] (min x, min y, max x, max y).
pub const BOUNDS_ORDINATES: usize = 4;

/// Axis-aligned rectangle in world or screen coordinates
///
/// Constructors and deserialization order the corners, so `min` never
/// exceeds `max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds")]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

#[derive(Deserialize)]
struct RawBounds {
    min: Point,
    max: Point,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Bounds::new(raw.min, raw.max)
    }
}

impl Bounds {
    /// Creates new bounds from two opposite corners in any order
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates bounds from a center point and size
    pub fn from_center_and_size(center: Point, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::new(
            Point::new(center.x - half_width, center.y - half_height),
            Point::new(center.x + half_width, center.y + half_height),
        )
    }

    /// Smallest bounds containing every point, `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::new(*first, *first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True when `other` lies entirely inside these bounds
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }

    pub fn extend(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Returns a new bounds grown by `amount` on every side
    pub fn expanded(&self, amount: f64) -> Bounds {
        Bounds::from_coords(
            self.min.x - amount,
            self.min.y - amount,
            self.max.x + amount,
            self.max.y + amount,
        )
    }

    /// Closest point inside the bounds
    ///
    /// Fields can be assigned directly, so the corners are re-ordered here
    /// instead of trusting `min <= max`.
    pub fn clamp(&self, point: &Point) -> Point {
        let Bounds { min, max } = Bounds::new(self.min, self.max);
        Point::new(
            point.x.max(min.x).min(max.x),
            point.y.max(min.y).min(max.y),
        )
    }

    /// Gets the four corner points of the bounds
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,                           // bottom-left
            Point::new(self.min.x, self.max.y), // top-left
            self.max,                           // top-right
            Point::new(self.max.x, self.min.y), // bottom-right
        ]
    }

    /// Checked ordinate access in `min x, min y, max x, max y` order
    pub fn ordinate(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.min.x),
            1 => Ok(self.min.y),
            2 => Ok(self.max.x),
            3 => Ok(self.max.y),
            _ => Err(MapError::IndexOutOfRange {
                index,
                len: BOUNDS_ORDINATES,
            }),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

impl Index<usize> for Bounds {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.min.x,
            1 => &self.min.y,
            2 => &self.max.x,
            3 => &self.max.y,
            _ => panic!(
                "ordinate index {} out of range for bounds with {} ordinates",
                index, BOUNDS_ORDINATES
            ),
        }
    }
}

/// Four corners of a possibly rotated rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub bottom_left: Point,
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
}

impl Quad {
    pub fn new(bottom_left: Point, top_left: Point, top_right: Point, bottom_right: Point) -> Self {
        Self {
            bottom_left,
            top_left,
            top_right,
            bottom_right,
        }
    }

    pub fn from_bounds(bounds: &Bounds) -> Self {
        let [bottom_left, top_left, top_right, bottom_right] = bounds.corners();
        Self::new(bottom_left, top_left, top_right, bottom_right)
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            self.bottom_left,
            self.top_left,
            self.top_right,
            self.bottom_right,
        ]
    }

    /// Rotates every corner counter-clockwise by `degrees` around `origin`
    pub fn rotate_about(&self, degrees: f64, origin: &Point) -> Quad {
        Quad::new(
            self.bottom_left.rotate_about(degrees, origin),
            self.top_left.rotate_about(degrees, origin),
            self.top_right.rotate_about(degrees, origin),
            self.bottom_right.rotate_about(degrees, origin),
        )
    }

    /// Axis-aligned bounding box of the four corners
    pub fn to_bounding_box(&self) -> Bounds {
        let mut bounds = Bounds::new(self.bottom_left, self.bottom_left);
        for corner in &self.corners()[1..] {
            bounds.extend(corner);
        }
        bounds
    }
}
