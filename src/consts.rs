//! Shared constants for the piece board.

// ── Pieces ──────────────────────────────────────────────────────

/// Radius of every piece, in logical units. Used by both hit-testing and drawing.
pub const PIECE_RADIUS: f64 = 20.0;

// ── Selection highlight ─────────────────────────────────────────

/// Outline width drawn around the selected piece.
pub const SELECTION_STROKE_WIDTH: f64 = 2.0;

/// Outline colour drawn around the selected piece.
pub const SELECTION_STROKE_COLOR: &str = "#000";

// ── Surface ─────────────────────────────────────────────────────

/// Default logical canvas width.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default logical canvas height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
