//! SVG rendering of the scene graph.

use erdraw_core::scene::Scene;
use erdraw_core::shapes::{Actor, ActorPart, Geometry, ShapeEntity, ShapeId};
use kurbo::Affine;
use peniko::Color;

/// Renders a scene into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Background color of the surface.
    pub background_color: Color,
    /// Stroke color for the selected entity.
    pub selection_color: Color,
}

impl SvgRenderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            selection_color: Color::from_rgba8(0, 0, 255, 255),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Render the scene to SVG markup.
    ///
    /// Committed entities are emitted in z-order, so later insertions paint
    /// on top. The selected entity is stroked in the highlight color; the
    /// uncommitted preview, if any, is appended last with a dashed stroke.
    pub fn render(
        &self,
        scene: &Scene,
        preview: Option<&ShapeEntity>,
        selected: Option<ShapeId>,
    ) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" style=\"background-color: {}\">\n",
            self.width,
            self.height,
            self.width,
            self.height,
            css_color(self.background_color)
        );
        for entity in scene.entities_ordered() {
            out.push_str(&self.entity_markup(entity, selected == Some(entity.id()), false));
        }
        if let Some(preview) = preview {
            out.push_str(&self.entity_markup(preview, false, true));
        }
        out.push_str("</svg>\n");
        out
    }

    fn entity_markup(&self, entity: &ShapeEntity, selected: bool, dashed: bool) -> String {
        let stroke = if selected {
            css_color(self.selection_color)
        } else {
            css_color(entity.style.stroke())
        };
        let fill = entity
            .style
            .fill()
            .map(css_color)
            .unwrap_or_else(|| "transparent".to_string());
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"",
            stroke, entity.style.stroke_width, fill
        );
        if dashed {
            attrs.push_str(" stroke-dasharray=\"4 2\"");
        }

        match &entity.geometry {
            Geometry::Rectangle(r) => format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}{}/>\n",
                r.origin.x,
                r.origin.y,
                r.width,
                r.height,
                attrs,
                matrix_attribute(entity.transform)
            ),
            Geometry::Ellipse(e) => format!(
                "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {}{}/>\n",
                e.center.x,
                e.center.y,
                e.radius_x,
                e.radius_y,
                attrs,
                matrix_attribute(entity.transform)
            ),
            Geometry::Triangle(t) => {
                let points = t
                    .vertices()
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "  <polygon points=\"{}\" {}{}/>\n",
                    points,
                    attrs,
                    matrix_attribute(entity.transform)
                )
            }
            Geometry::Actor(a) => actor_markup(a, &attrs, &stroke, entity.transform),
        }
    }
}

/// Actor glyphs are emitted as a `<g>` placed by a `translate(...)`, with
/// any accumulated drag matrix composed in front of it.
fn actor_markup(actor: &Actor, attrs: &str, stroke: &str, transform: Affine) -> String {
    let placement = format!("translate({}, {})", actor.anchor.x, actor.anchor.y);
    let outer = if transform == Affine::IDENTITY {
        placement
    } else {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        format!("matrix({}, {}, {}, {}, {}, {}) {}", a, b, c, d, e, f, placement)
    };
    let mut group = format!("  <g {} transform=\"{}\">\n", attrs, outer);
    for part in Actor::parts() {
        match part {
            ActorPart::Circle { center, radius } => group.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"white\"/>\n",
                center.x, center.y, radius
            )),
            ActorPart::Line { from, to } => group.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>\n",
                from.x, from.y, to.x, to.y
            )),
            ActorPart::Label { position, text } => group.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" stroke=\"none\" \
                 fill=\"{}\">{}</text>\n",
                position.x,
                position.y,
                stroke,
                escape_xml(text)
            )),
        }
    }
    group.push_str("  </g>\n");
    group
}

/// `transform="matrix(...)"` attribute with a leading space, or empty for
/// an identity transform.
fn matrix_attribute(transform: Affine) -> String {
    if transform == Affine::IDENTITY {
        return String::new();
    }
    let [a, b, c, d, e, f] = transform.as_coeffs();
    format!(" transform=\"matrix({}, {}, {}, {}, {}, {})\"", a, b, c, d, e, f)
}

/// CSS color string, `rgb(...)` when opaque.
fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("rgb({}, {}, {})", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            rgba.a as f64 / 255.0
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
