//! Input model: pointer events, selection, and the drag state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! `UiState` holds the selection, which outlives a gesture: releasing a piece
//! leaves it selected. Both are owned by [`crate::engine::EngineCore`]; the
//! renderer only reads them.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::store::PieceId;

/// A pointer event in logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a point.
    Down(Point),
    /// Pointer moved to a point.
    Move(Point),
    /// Primary button released.
    Up,
    /// Pointer left the tracked surface.
    Leave,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// The id of the currently selected piece, if any.
    pub selected_id: Option<PieceId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging a piece.
    Dragging {
        /// Id of the piece being dragged.
        id: PieceId,
        /// Pointer position minus piece position at drag start, held for the whole drag.
        pointer_offset: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Flattened view of the gesture for readers that don't match on the enum.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        match self {
            Self::Idle => DragState::default(),
            Self::Dragging { id, pointer_offset } => DragState {
                active: true,
                dragged_id: Some(id.clone()),
                pointer_offset: *pointer_offset,
            },
        }
    }
}

/// Snapshot of the current drag gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub dragged_id: Option<PieceId>,
    pub pointer_offset: Point,
}
