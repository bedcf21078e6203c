//! Piece model and the in-memory piece store.
//!
//! The store keeps pieces in insertion order, which is the tie-break for
//! pieces sharing a `z_index`. It is owned by [`crate::engine::EngineCore`]
//! and only mutated through [`PieceStore::update_position`]; callers receive
//! short-lived borrows, never long-lived handles to individual pieces.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Unique, stable identifier for a piece.
pub type PieceId = String;

/// A circular, coloured, z-ordered piece on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Unique identifier; never shared between two pieces.
    pub id: PieceId,
    /// Centre of the piece in logical coordinates.
    pub position: Point,
    /// Fill colour as a CSS colour string.
    pub color: String,
    /// Stacking order; higher values draw on top and win hit-tests.
    #[serde(alias = "zIndex")]
    pub z_index: i64,
}

/// Errors raised by [`PieceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Two pieces in the initial set share an id.
    #[error("duplicate piece id: {0}")]
    DuplicateId(PieceId),
    /// No piece with the given id exists.
    #[error("piece not found: {0}")]
    NotFound(PieceId),
}

/// Ordered collection of pieces with id lookup.
#[derive(Debug, Clone, Default)]
pub struct PieceStore {
    pieces: Vec<Piece>,
    index: HashMap<PieceId, usize>,
}

impl PieceStore {
    /// Build a store from an initial set of pieces.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two pieces share an id.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            if index.insert(piece.id.clone(), i).is_some() {
                return Err(StoreError::DuplicateId(piece.id.clone()));
            }
        }
        Ok(Self { pieces, index })
    }

    /// Return a reference to a piece by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Piece> {
        self.index.get(id).map(|&i| &self.pieces[i])
    }

    /// Move the piece with `id` to `position`. Every other piece and field is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no piece has that id.
    pub fn update_position(&mut self, id: &str, position: Point) -> Result<(), StoreError> {
        let Some(&i) = self.index.get(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        self.pieces[i].position = position;
        Ok(())
    }

    /// Pieces in draw order: lowest `z_index` first, ties in insertion order.
    #[must_use]
    pub fn sorted_by_z_ascending(&self) -> Vec<&Piece> {
        let mut sorted: Vec<&Piece> = self.pieces.iter().collect();
        sorted.sort_by_key(|p| p.z_index);
        sorted
    }

    /// Pieces in hit-test order: highest `z_index` first, ties in insertion order.
    #[must_use]
    pub fn sorted_by_z_descending(&self) -> Vec<&Piece> {
        let mut sorted: Vec<&Piece> = self.pieces.iter().collect();
        sorted.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        sorted
    }

    /// Iterate pieces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Number of pieces in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if the store holds no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
