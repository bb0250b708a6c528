use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of ordinates carried by a [`Point`].
pub const POINT_ORDINATES: usize = 2;

/// Represents a point in screen (pixel) or world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn round(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }

    /// Rotates the point counter-clockwise by `degrees` around `origin`.
    ///
    /// Counter-clockwise holds for a y-up plane; on a y-down screen the same
    /// call turns the point clockwise.
    pub fn rotate_about(&self, degrees: f64, origin: &Point) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point::new(
            cos * dx - sin * dy + origin.x,
            sin * dx + cos * dy + origin.y,
        )
    }

    /// Checked access to an ordinate: 0 is x, 1 is y.
    pub fn ordinate(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MapError::IndexOutOfRange {
                index,
                len: POINT_ORDINATES,
            }),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Panics on an ordinate index other than 0 or 1; use [`Point::ordinate`]
/// for a checked lookup.
impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!(
                "ordinate index {} out of range for a point with {} ordinates",
                index, POINT_ORDINATES
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_math() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(a.add(&b), Point::new(4.0, 5.0));
        assert_eq!(a.subtract(&b), Point::new(2.0, 3.0));
        assert_eq!(a.multiply(2.0), Point::new(6.0, 8.0));
        assert_eq!(a.distance_to(&Point::default()), 5.0);
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let p = Point::new(2.0, 1.0).rotate_about(90.0, &Point::new(1.0, 1.0));
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_about_inverse() {
        let origin = Point::new(50.0, -20.0);
        let p = Point::new(13.5, 92.25);
        let back = p.rotate_about(37.0, &origin).rotate_about(-37.0, &origin);
        assert!(back.distance_to(&p) < 1e-9);
    }

    #[test]
    fn test_ordinate_access() {
        let p = Point::new(7.0, 9.0);
        assert_eq!(p[0], 7.0);
        assert_eq!(p[1], 9.0);
        assert_eq!(p.ordinate(1).unwrap(), 9.0);
        assert!(matches!(
            p.ordinate(2),
            Err(MapError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let p = Point::new(1.0, 2.0);
        let _ = p[2];
    }
}
