//! Pointer event contract consumed by the tool session.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    /// The pointer left the drawing surface; any gesture in progress is
    /// cancelled.
    Leave,
}

/// A pointer event in surface-local coordinates.
///
/// The host that owns the drawing surface translates device coordinates
/// into surface-local ones before dispatching. The timestamp is carried for
/// hosts that want it; the session itself is driven purely by arrival
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
    pub timestamp_ms: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(action: PointerAction, position: Point, timestamp_ms: f64) -> Self {
        Self {
            action,
            position,
            timestamp_ms,
        }
    }

    /// A pointer-down at `position`.
    pub fn down(position: Point) -> Self {
        Self::new(PointerAction::Down, position, 0.0)
    }

    /// A pointer-move to `position`.
    pub fn moved(position: Point) -> Self {
        Self::new(PointerAction::Move, position, 0.0)
    }

    /// A pointer-up at `position`.
    pub fn up(position: Point) -> Self {
        Self::new(PointerAction::Up, position, 0.0)
    }

    /// The pointer leaving the surface at `position`.
    pub fn leave(position: Point) -> Self {
        Self::new(PointerAction::Leave, position, 0.0)
    }
}
