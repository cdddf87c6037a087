//! Ellipse geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Build an ellipse inscribed in the drag from `anchor` to `current`:
    /// the center is the midpoint and the radii are half the distance
    /// dragged along each axis.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        Self {
            center: Point::new((anchor.x + current.x) / 2.0, (anchor.y + current.y) / 2.0),
            radius_x: (current.x - anchor.x).abs() / 2.0,
            radius_y: (current.y - anchor.y).abs() / 2.0,
        }
    }

    /// Bounding box of the ellipse.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drag() {
        let ellipse = Ellipse::from_drag(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
        assert!((ellipse.center.x - 10.0).abs() < f64::EPSILON);
        assert!((ellipse.center.y - 5.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_x - 10.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_drag_reversed() {
        let forward = Ellipse::from_drag(Point::new(0.0, 0.0), Point::new(20.0, 10.0));
        let reversed = Ellipse::from_drag(Point::new(20.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_bounds() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
