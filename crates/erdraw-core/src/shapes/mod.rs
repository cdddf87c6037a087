//! Shape entities committed to the scene graph.

mod actor;
mod ellipse;
mod rectangle;
mod triangle;

pub use actor::{Actor, ActorPart};
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use kurbo::{Affine, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
///
/// Stroke and fill are fixed constants in this editor; every committed
/// entity carries the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: Rgba,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<Rgba>,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Unique identifier for shape entities.
pub type ShapeId = Uuid;

/// Kind-specific base geometry of a committed entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Actor(Actor),
}

impl Geometry {
    /// Bounding box of the base geometry, before any accumulated transform.
    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Rectangle(r) => r.bounds(),
            Geometry::Ellipse(e) => e.bounds(),
            Geometry::Triangle(t) => t.bounds(),
            Geometry::Actor(a) => a.bounds(),
        }
    }

    /// Name of the shape kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Rectangle(_) => "rectangle",
            Geometry::Ellipse(_) => "ellipse",
            Geometry::Triangle(_) => "triangle",
            Geometry::Actor(_) => "actor",
        }
    }
}

/// A committed diagram element.
///
/// The base geometry is fixed at commit time; moving an entity only ever
/// composes onto its accumulated `transform`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntity {
    pub(crate) id: ShapeId,
    /// Kind-specific base geometry.
    pub geometry: Geometry,
    /// Accumulated affine offset applied on top of the base geometry.
    #[serde(default)]
    pub transform: Affine,
    /// Style properties.
    pub style: ShapeStyle,
}

impl ShapeEntity {
    /// Create a new entity with an identity transform and default style.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            transform: Affine::IDENTITY,
            style: ShapeStyle::default(),
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Bounding box with the accumulated transform applied.
    pub fn bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.geometry.bounds())
    }

    /// Whether the transformed bounding box contains `point`.
    ///
    /// The box is a conservative hit region for non-rectangular shapes.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Compose a movement delta onto the accumulated transform.
    pub fn apply_transform(&mut self, delta: Affine) {
        self.transform = delta * self.transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn test_new_entity_has_identity_transform() {
        let entity = ShapeEntity::new(Geometry::Rectangle(Rectangle::new(
            Point::new(0.0, 0.0),
            10.0,
            10.0,
        )));
        assert_eq!(entity.transform, Affine::IDENTITY);
    }

    #[test]
    fn test_bounds_follow_transform() {
        let mut entity = ShapeEntity::new(Geometry::Rectangle(Rectangle::new(
            Point::new(0.0, 0.0),
            10.0,
            10.0,
        )));
        entity.apply_transform(Affine::translate(Vec2::new(5.0, 7.0)));
        let bounds = entity.bounds();
        assert!((bounds.x0 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_composition_is_associative() {
        let base = ShapeEntity::new(Geometry::Ellipse(Ellipse::new(
            Point::new(50.0, 50.0),
            20.0,
            10.0,
        )));

        let mut stepped = base.clone();
        stepped.apply_transform(Affine::translate(Vec2::new(1.0, 2.0)));
        stepped.apply_transform(Affine::translate(Vec2::new(3.0, 4.0)));
        stepped.apply_transform(Affine::translate(Vec2::new(5.0, 6.0)));

        let mut single = base.clone();
        single.apply_transform(Affine::translate(Vec2::new(9.0, 12.0)));

        let a = stepped.transform.as_coeffs();
        let b = single.transform.as_coeffs();
        for i in 0..6 {
            assert!((a[i] - b[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contains_uses_transformed_box() {
        let mut entity = ShapeEntity::new(Geometry::Triangle(Triangle::from_drag(
            Point::new(0.0, 0.0),
            Point::new(20.0, 20.0),
        )));
        assert!(entity.contains(Point::new(10.0, 10.0)));
        entity.apply_transform(Affine::translate(Vec2::new(100.0, 0.0)));
        assert!(!entity.contains(Point::new(10.0, 10.0)));
        assert!(entity.contains(Point::new(110.0, 10.0)));
    }
}
