//! Rectangle geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Always normalized: `origin` is the minimum corner and the size is
/// non-negative, regardless of which direction the gesture was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner position.
    pub origin: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Build a rectangle from the anchor and current point of a drag.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        Self {
            origin: Point::new(anchor.x.min(current.x), anchor.y.min(current.y)),
            width: (current.x - anchor.x).abs(),
            height: (current.y - anchor.y).abs(),
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drag() {
        let rect = Rectangle::from_drag(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        assert!((rect.origin.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.origin.y - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_drag_normalizes_direction() {
        let down_right = Rectangle::from_drag(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        let up_left = Rectangle::from_drag(Point::new(50.0, 40.0), Point::new(10.0, 10.0));
        assert_eq!(down_right, up_left);
        assert!(up_left.width >= 0.0);
        assert!(up_left.height >= 0.0);
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
