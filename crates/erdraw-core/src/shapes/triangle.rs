//! Triangle geometry.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An isosceles triangle with a horizontal base.
///
/// The base sits at the pointer's current Y and the apex at the anchor's Y,
/// halfway between the base corners. Base corners are normalized so that
/// `base_left.x <= base_right.x` regardless of drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Left base corner.
    pub base_left: Point,
    /// Right base corner.
    pub base_right: Point,
    /// Apex, centered above (or below) the base.
    pub apex: Point,
}

impl Triangle {
    /// Build a triangle from the anchor and current point of a drag.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        let (left_x, right_x) = if anchor.x <= current.x {
            (anchor.x, current.x)
        } else {
            (current.x, anchor.x)
        };
        Self {
            base_left: Point::new(left_x, current.y),
            base_right: Point::new(right_x, current.y),
            apex: Point::new((anchor.x + current.x) / 2.0, anchor.y),
        }
    }

    /// The three vertices in polygon order: base corners first, apex last.
    pub fn vertices(&self) -> [Point; 3] {
        [self.base_left, self.base_right, self.apex]
    }

    /// Bounding box of the three vertices.
    pub fn bounds(&self) -> Rect {
        let [a, b, c] = self.vertices();
        Rect::new(
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_drag() {
        let tri = Triangle::from_drag(Point::new(10.0, 10.0), Point::new(50.0, 40.0));
        assert_eq!(tri.base_left, Point::new(10.0, 40.0));
        assert_eq!(tri.base_right, Point::new(50.0, 40.0));
        assert_eq!(tri.apex, Point::new(30.0, 10.0));
    }

    #[test]
    fn test_from_drag_leftwards_normalizes_base() {
        let tri = Triangle::from_drag(Point::new(50.0, 10.0), Point::new(10.0, 40.0));
        assert!(tri.base_left.x <= tri.base_right.x);
        assert_eq!(tri.base_left, Point::new(10.0, 40.0));
        assert_eq!(tri.base_right, Point::new(50.0, 40.0));
        assert_eq!(tri.apex, Point::new(30.0, 10.0));
    }

    #[test]
    fn test_bounds_spans_apex_and_base() {
        // Dragging upwards puts the base above the apex.
        let tri = Triangle::from_drag(Point::new(10.0, 40.0), Point::new(50.0, 10.0));
        let bounds = tri.bounds();
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collinear_drag_has_zero_area_bounds() {
        let tri = Triangle::from_drag(Point::new(10.0, 20.0), Point::new(50.0, 20.0));
        assert!(tri.bounds().area().abs() < f64::EPSILON);
    }
}
