//! Replays a scripted pointer session and prints the resulting SVG.
//!
//! Run with `RUST_LOG=debug` to watch the session transitions.

use erdraw_core::{PointerEvent, ToolKind, ToolSession};
use erdraw_render::SvgRenderer;
use kurbo::Point;

fn main() {
    env_logger::init();

    let mut session = ToolSession::new();

    // Drag out a rectangle.
    session.select_tool(Some(ToolKind::Rectangle));
    session.handle_pointer(PointerEvent::down(Point::new(40.0, 40.0)));
    session.handle_pointer(PointerEvent::moved(Point::new(120.0, 90.0)));
    session.handle_pointer(PointerEvent::up(Point::new(120.0, 90.0)));

    // And an ellipse overlapping it.
    session.select_tool(Some(ToolKind::Ellipse));
    session.handle_pointer(PointerEvent::down(Point::new(100.0, 70.0)));
    session.handle_pointer(PointerEvent::up(Point::new(220.0, 140.0)));

    // Place an actor; placement commits on pointer-down.
    session.select_tool(Some(ToolKind::Actor));
    session.handle_pointer(PointerEvent::down(Point::new(320.0, 110.0)));
    session.handle_pointer(PointerEvent::up(Point::new(320.0, 110.0)));

    // Select the ellipse (topmost at the overlap) and drag it aside.
    session.select_tool(Some(ToolKind::Select));
    session.handle_pointer(PointerEvent::down(Point::new(110.0, 80.0)));
    session.handle_pointer(PointerEvent::moved(Point::new(140.0, 100.0)));
    session.handle_pointer(PointerEvent::up(Point::new(140.0, 100.0)));

    let renderer = SvgRenderer::new(480.0, 240.0);
    let svg = renderer.render(
        session.scene(),
        session.current_preview().as_ref(),
        session.selected(),
    );
    println!("{svg}");
}
