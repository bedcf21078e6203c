//! Rendering: draws the board onto any surface satisfying [`Surface`].
//!
//! The renderer receives read-only views of the pieces and the selection and
//! produces pixels. It holds no state between calls and never mutates piece
//! or selection state. Every call redraws the whole scene.
//!
//! The browser backend is the `Surface` impl for
//! [`web_sys::CanvasRenderingContext2d`] at the bottom of this file; tests use
//! a recording surface instead.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::PIECE_RADIUS;
use crate::geometry::Point;
use crate::store::Piece;

/// Axis-aligned rectangle in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Bounds anchored at the origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }
}

/// Outline drawn over the selected piece.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStyle {
    pub width: f64,
    pub color: String,
}

/// Minimal 2D drawing contract the board needs from a backend.
pub trait Surface {
    type Error;

    /// Clear `bounds` to transparent.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn clear(&mut self, bounds: Bounds) -> Result<(), Self::Error>;

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;

    /// Stroke a circle outline.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: &str)
        -> Result<(), Self::Error>;
}

/// Draw the full scene: clear, then every piece bottom-up, outlining the selected one.
///
/// `pieces` are drawn in the order given, so pass them bottom-up (see
/// [`crate::store::PieceStore::sorted_by_z_ascending`]).
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn draw<'a, S, I>(
    surface: &mut S,
    bounds: Bounds,
    pieces: I,
    selected_id: Option<&str>,
    style: &SelectionStyle,
) -> Result<(), S::Error>
where
    S: Surface,
    I: IntoIterator<Item = &'a Piece>,
{
    surface.clear(bounds)?;

    for piece in pieces {
        surface.fill_circle(piece.position, PIECE_RADIUS, &piece.color)?;
        if selected_id == Some(piece.id.as_str()) {
            surface.stroke_circle(piece.position, PIECE_RADIUS, style.width, &style.color)?;
        }
    }
    Ok(())
}

// =============================================================
// Canvas 2D backend
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, bounds: Bounds) -> Result<(), JsValue> {
        self.clear_rect(bounds.x, bounds.y, bounds.width, bounds.height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.set_fill_style_str(color);
        self.fill();
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.stroke();
        Ok(())
    }
}
