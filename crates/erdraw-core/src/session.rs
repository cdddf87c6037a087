//! Tool session controller: the state machine behind pointer gestures.

use crate::input::{PointerAction, PointerEvent};
use crate::scene::Scene;
use crate::shapes::{ShapeEntity, ShapeId};
use crate::tools::ToolKind;
use kurbo::{Affine, Point};
use log::debug;

/// Phase of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A shape is being dragged out; the preview follows `current`.
    Drawing { anchor: Point, current: Point },
    /// A committed entity is being moved.
    Dragging { target: ShapeId, last_point: Point },
}

/// The tool session: active tool, gesture phase and selection, plus the
/// scene the session commits into.
///
/// All transitions happen synchronously inside
/// [`handle_pointer`](Self::handle_pointer); the host delivers the events of
/// a gesture (down, move*, up) strictly in arrival order.
#[derive(Debug, Clone, Default)]
pub struct ToolSession {
    scene: Scene,
    active_tool: Option<ToolKind>,
    phase: Phase,
    selected: Option<ShapeId>,
}

impl ToolSession {
    /// Create a session with an empty scene and no armed tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an existing scene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    /// The scene of committed entities.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Arm a tool, or disarm with `None`. Any gesture in progress is
    /// dropped; switching away from the selection tool also deselects.
    pub fn select_tool(&mut self, tool: Option<ToolKind>) {
        debug!("session: tool -> {:?}", tool);
        self.active_tool = tool;
        self.phase = Phase::Idle;
        if tool != Some(ToolKind::Select) {
            self.selected = None;
        }
    }

    /// Arm a tool by its toolbar name. Unknown names disarm the session.
    pub fn select_tool_by_name(&mut self, name: &str) {
        self.select_tool(ToolKind::from_name(name));
    }

    /// The currently armed tool, if any.
    pub fn active_tool(&self) -> Option<ToolKind> {
        self.active_tool
    }

    /// The current gesture phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The currently selected entity, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Whether no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The shape being previewed, recomputed from the gesture so far.
    ///
    /// Repeated calls replace rather than accumulate: the preview is a pure
    /// function of the anchor and the latest pointer position. `None`
    /// outside the drawing phase.
    pub fn current_preview(&self) -> Option<ShapeEntity> {
        let Phase::Drawing { anchor, current } = self.phase else {
            return None;
        };
        self.active_tool?.shape_for(anchor, current)
    }

    /// Dispatch one pointer event to the active tool.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.action {
            PointerAction::Down => self.on_down(event.position),
            PointerAction::Move => self.on_move(event.position),
            PointerAction::Up => self.on_up(event.position),
            PointerAction::Leave => self.cancel(),
        }
    }

    /// Cancel any gesture in progress without committing. Idempotent: on an
    /// already-idle session this is a no-op.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Idle {
            debug!("session: gesture cancelled");
            self.phase = Phase::Idle;
        }
    }

    fn on_down(&mut self, position: Point) {
        if self.phase != Phase::Idle {
            // A second down mid-gesture is a host glitch; keep the gesture.
            return;
        }
        match self.active_tool {
            None => {}
            Some(ToolKind::Select) => match self.scene.topmost_at(position) {
                Some(id) => {
                    debug!("session: select {}", id);
                    self.selected = Some(id);
                    self.phase = Phase::Dragging {
                        target: id,
                        last_point: position,
                    };
                }
                None => {
                    self.selected = None;
                }
            },
            Some(tool) if tool.places_on_down() => {
                // Fixed-size placement commits immediately; the matching up
                // lands on an idle session.
                if let Some(entity) = tool.shape_for(position, position) {
                    self.scene.insert(entity);
                }
            }
            Some(_) => {
                self.phase = Phase::Drawing {
                    anchor: position,
                    current: position,
                };
            }
        }
    }

    fn on_move(&mut self, position: Point) {
        match &mut self.phase {
            Phase::Drawing { current, .. } => *current = position,
            Phase::Dragging { target, last_point } => {
                let delta = position - *last_point;
                self.scene.apply_transform(*target, Affine::translate(delta));
                *last_point = position;
            }
            Phase::Idle => {}
        }
    }

    fn on_up(&mut self, position: Point) {
        match self.phase {
            Phase::Drawing { anchor, .. } => {
                self.phase = Phase::Idle;
                let Some(tool) = self.active_tool else {
                    return;
                };
                let Some(entity) = tool.shape_for(anchor, position) else {
                    return;
                };
                if entity.geometry.bounds().area() == 0.0 {
                    debug!(
                        "session: zero-area {} drag, commit suppressed",
                        entity.geometry.kind_name()
                    );
                    return;
                }
                self.scene.insert(entity);
            }
            Phase::Dragging { .. } => {
                // Selection survives the gesture.
                self.phase = Phase::Idle;
            }
            Phase::Idle => {}
        }
    }
}
