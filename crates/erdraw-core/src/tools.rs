//! Tool selection and shape construction.

use crate::shapes::{Actor, Ellipse, Geometry, Rectangle, ShapeEntity, Triangle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Ellipse,
    Triangle,
    Actor,
}

impl ToolKind {
    /// Parse a toolbar tool name.
    ///
    /// Unknown names yield `None`, which disarms the session.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" | "pointer" => Some(ToolKind::Select),
            "rectangle" => Some(ToolKind::Rectangle),
            "ellipse" => Some(ToolKind::Ellipse),
            "triangle" => Some(ToolKind::Triangle),
            "actor" => Some(ToolKind::Actor),
            _ => None,
        }
    }

    /// Whether this tool commits on pointer-down alone (fixed-size
    /// placement rather than a drag gesture).
    pub fn places_on_down(&self) -> bool {
        matches!(self, ToolKind::Actor)
    }

    /// Build the entity this tool produces for a gesture from `anchor` to
    /// `current`. The selection tool produces no shape; the actor tool
    /// ignores the terminal point.
    pub fn shape_for(&self, anchor: Point, current: Point) -> Option<ShapeEntity> {
        let geometry = match self {
            ToolKind::Rectangle => Geometry::Rectangle(Rectangle::from_drag(anchor, current)),
            ToolKind::Ellipse => Geometry::Ellipse(Ellipse::from_drag(anchor, current)),
            ToolKind::Triangle => Geometry::Triangle(Triangle::from_drag(anchor, current)),
            ToolKind::Actor => Geometry::Actor(Actor::at(anchor)),
            ToolKind::Select => return None,
        };
        Some(ShapeEntity::new(geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ToolKind::from_name("rectangle"), Some(ToolKind::Rectangle));
        assert_eq!(ToolKind::from_name("pointer"), Some(ToolKind::Select));
        assert_eq!(ToolKind::from_name("connector"), None);
        assert_eq!(ToolKind::from_name(""), None);
    }

    #[test]
    fn test_select_produces_no_shape() {
        let shape = ToolKind::Select.shape_for(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(shape.is_none());
    }

    #[test]
    fn test_actor_ignores_terminal_point() {
        let anchor = Point::new(30.0, 40.0);
        let near = ToolKind::Actor.shape_for(anchor, anchor);
        let far = ToolKind::Actor.shape_for(anchor, Point::new(500.0, 500.0));
        let (Some(near), Some(far)) = (near, far) else {
            panic!("actor tool produces a shape");
        };
        assert_eq!(near.geometry, far.geometry);
    }

    #[test]
    fn test_shape_kinds_match_tool() {
        let anchor = Point::new(0.0, 0.0);
        let current = Point::new(10.0, 10.0);
        let rect = ToolKind::Rectangle.shape_for(anchor, current);
        assert!(matches!(
            rect.map(|e| e.geometry),
            Some(Geometry::Rectangle(_))
        ));
        let tri = ToolKind::Triangle.shape_for(anchor, current);
        assert!(matches!(
            tri.map(|e| e.geometry),
            Some(Geometry::Triangle(_))
        ));
    }
}
