//! Board configuration: canvas size, selection highlight, and the starting pieces.
//!
//! Defaults reproduce the stock three-piece board. A host can override any
//! subset of fields by passing a JSON document to [`BoardConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, SELECTION_STROKE_COLOR, SELECTION_STROKE_WIDTH};
use crate::geometry::Point;
use crate::store::{Piece, StoreError};

/// Errors raised while loading or validating a [`BoardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid canvas size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("invalid selection stroke width: {0}")]
    InvalidStroke(f64),
    #[error("failed to parse board config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Initialization input for a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Logical canvas width; also the clear bounds.
    pub width: f64,
    /// Logical canvas height; also the clear bounds.
    pub height: f64,
    pub selection_stroke_width: f64,
    pub selection_stroke_color: String,
    /// Starting pieces. Ids must be unique.
    pub pieces: Vec<Piece>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            selection_stroke_width: SELECTION_STROKE_WIDTH,
            selection_stroke_color: SELECTION_STROKE_COLOR.to_string(),
            pieces: default_pieces(),
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON, or any error from
    /// [`BoardConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes and stroke width. Piece id uniqueness is checked by the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] or [`ConfigError::InvalidStroke`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        if !positive(self.selection_stroke_width) {
            return Err(ConfigError::InvalidStroke(self.selection_stroke_width));
        }
        Ok(())
    }
}

fn default_pieces() -> Vec<Piece> {
    [
        ("1", 100.0, 100.0, "#FF4444", 1),
        ("2", 200.0, 150.0, "#44FF44", 2),
        ("3", 300.0, 200.0, "#4444FF", 3),
    ]
    .into_iter()
    .map(|(id, x, y, color, z_index)| Piece {
        id: id.to_string(),
        position: Point::new(x, y),
        color: color.to_string(),
        z_index,
    })
    .collect()
}
