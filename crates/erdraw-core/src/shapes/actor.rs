//! Actor glyph: a fixed-size stick figure with a label.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Nominal extent of the label text, used for the bounding box.
const LABEL_HALF_WIDTH: f64 = 20.0;
const LABEL_ASCENT: f64 = 12.0;

/// An actor placed at a single anchor point.
///
/// Unlike the drag-sized shapes, the glyph layout is constant: the size does
/// not depend on the gesture, only the placement point does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Placement point. Glyph parts are laid out relative to it.
    pub anchor: Point,
}

/// One stroke of the actor glyph, in anchor-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActorPart {
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Label { position: Point, text: &'static str },
}

impl Actor {
    /// Place an actor at the given point.
    pub fn at(anchor: Point) -> Self {
        Self { anchor }
    }

    /// The glyph's part layout: head, torso, arms, legs and label.
    pub fn parts() -> Vec<ActorPart> {
        vec![
            // Head
            ActorPart::Circle {
                center: Point::new(0.0, -30.0),
                radius: 15.0,
            },
            // Torso
            ActorPart::Line {
                from: Point::new(0.0, -15.0),
                to: Point::new(0.0, 20.0),
            },
            // Arms
            ActorPart::Line {
                from: Point::new(0.0, -8.0),
                to: Point::new(-18.0, 2.0),
            },
            ActorPart::Line {
                from: Point::new(0.0, -8.0),
                to: Point::new(18.0, 2.0),
            },
            // Legs
            ActorPart::Line {
                from: Point::new(0.0, 20.0),
                to: Point::new(-14.0, 42.0),
            },
            ActorPart::Line {
                from: Point::new(0.0, 20.0),
                to: Point::new(14.0, 42.0),
            },
            ActorPart::Label {
                position: Point::new(0.0, 58.0),
                text: "Actor",
            },
        ]
    }

    /// Bounding box of the glyph at its anchor.
    pub fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        for part in Self::parts() {
            let part_bounds = match part {
                ActorPart::Circle { center, radius } => Rect::new(
                    center.x - radius,
                    center.y - radius,
                    center.x + radius,
                    center.y + radius,
                ),
                ActorPart::Line { from, to } => Rect::new(
                    from.x.min(to.x),
                    from.y.min(to.y),
                    from.x.max(to.x),
                    from.y.max(to.y),
                ),
                ActorPart::Label { position, .. } => Rect::new(
                    position.x - LABEL_HALF_WIDTH,
                    position.y - LABEL_ASCENT,
                    position.x + LABEL_HALF_WIDTH,
                    position.y,
                ),
            };
            bounds = Some(match bounds {
                Some(b) => b.union(part_bounds),
                None => part_bounds,
            });
        }
        // parts() is never empty
        let local = bounds.unwrap_or(Rect::ZERO);
        Rect::new(
            local.x0 + self.anchor.x,
            local.y0 + self.anchor.y,
            local.x1 + self.anchor.x,
            local.y1 + self.anchor.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_anchor() {
        let at_origin = Actor::at(Point::new(0.0, 0.0)).bounds();
        let moved = Actor::at(Point::new(100.0, 200.0)).bounds();
        assert!((moved.x0 - at_origin.x0 - 100.0).abs() < f64::EPSILON);
        assert!((moved.y0 - at_origin.y0 - 200.0).abs() < f64::EPSILON);
        assert!((moved.width() - at_origin.width()).abs() < f64::EPSILON);
        assert!((moved.height() - at_origin.height()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_nonzero() {
        let actor = Actor::at(Point::new(50.0, 50.0));
        assert!(actor.bounds().area() > 0.0);
    }

    #[test]
    fn test_bounds_cover_head_and_legs() {
        let actor = Actor::at(Point::new(0.0, 0.0));
        let bounds = actor.bounds();
        // Head top at -45, label baseline at 58.
        assert!(bounds.y0 <= -45.0);
        assert!(bounds.y1 >= 58.0);
    }
}
