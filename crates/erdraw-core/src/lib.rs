//! ErDraw Core Library
//!
//! The interactive editing engine of the erdraw diagram editor: the
//! pointer-driven tool session, shape geometry, the retained scene graph,
//! hit-testing and per-entity transform composition. Platform glue (event
//! translation, toolbars, rendering surfaces) lives with the host.

pub mod input;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod tools;

pub use input::{PointerAction, PointerEvent};
pub use scene::Scene;
pub use session::{Phase, ToolSession};
pub use shapes::{Geometry, ShapeEntity, ShapeId, ShapeStyle};
pub use tools::ToolKind;
