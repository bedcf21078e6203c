//! Device-to-logical coordinate mapping for the drawing surface.
//!
//! The board works purely in logical coordinates (the configured canvas
//! width and height). The browser reports pointer positions in client CSS
//! pixels and backs the canvas with `css size * device pixel ratio` physical
//! pixels. `SurfaceAdapter` owns both conversions so nothing past the engine
//! boundary ever sees device units.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::geometry::Point;

/// Snapshot of the canvas layout box and pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceAdapter {
    /// Client-space x of the canvas's left edge, in CSS pixels.
    pub left: f64,
    /// Client-space y of the canvas's top edge, in CSS pixels.
    pub top: f64,
    /// Displayed width in CSS pixels.
    pub css_width: f64,
    /// Displayed height in CSS pixels.
    pub css_height: f64,
    /// Logical board width.
    pub logical_width: f64,
    /// Logical board height.
    pub logical_height: f64,
    /// Device pixel ratio.
    pub dpr: f64,
}

impl SurfaceAdapter {
    /// Build an adapter from a measured layout box.
    ///
    /// A canvas that hasn't been laid out yet (zero or non-finite CSS size)
    /// is treated as displayed at its logical size, and a non-positive pixel
    /// ratio falls back to 1.
    #[must_use]
    pub fn new(
        left: f64,
        top: f64,
        css_width: f64,
        css_height: f64,
        logical_width: f64,
        logical_height: f64,
        dpr: f64,
    ) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        Self {
            left,
            top,
            css_width: if usable(css_width) { css_width } else { logical_width },
            css_height: if usable(css_height) { css_height } else { logical_height },
            logical_width,
            logical_height,
            dpr: if usable(dpr) { dpr } else { 1.0 },
        }
    }

    /// An adapter for a canvas displayed at its logical size at the client origin.
    #[must_use]
    pub fn identity(logical_width: f64, logical_height: f64) -> Self {
        Self::new(0.0, 0.0, logical_width, logical_height, logical_width, logical_height, 1.0)
    }

    /// Convert a client-space pointer position to logical board coordinates.
    #[must_use]
    pub fn to_logical(&self, client_x: f64, client_y: f64) -> Point {
        Point {
            x: (client_x - self.left) * self.logical_width / self.css_width,
            y: (client_y - self.top) * self.logical_height / self.css_height,
        }
    }

    /// Physical backing-store size for the canvas element.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.css_width * self.dpr).round().max(1.0) as u32,
            (self.css_height * self.dpr).round().max(1.0) as u32,
        )
    }

    /// Scale to apply to the 2D context so logical units land on physical pixels.
    #[must_use]
    pub fn backing_scale(&self) -> (f64, f64) {
        (
            self.css_width * self.dpr / self.logical_width,
            self.css_height * self.dpr / self.logical_height,
        )
    }
}
