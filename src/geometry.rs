//! Geometry and hit-testing over circular pieces.
//!
//! Everything here is a pure function of its inputs. Hit-testing uses the
//! same radius the renderer draws with ([`crate::consts::PIECE_RADIUS`]).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::store::Piece;

/// A point (or offset vector) in logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Whether `point` lies inside (or on the edge of) `piece` drawn at `radius`.
#[must_use]
pub fn is_hit(point: Point, piece: &Piece, radius: f64) -> bool {
    distance_squared(point, piece.position) <= radius * radius
}

/// Return the hit piece with the greatest `z_index`.
///
/// Among hit pieces sharing the greatest `z_index`, the one that comes first
/// in `pieces` wins. Feeding the output of
/// [`crate::store::PieceStore::sorted_by_z_descending`] therefore resolves ties
/// by original insertion order.
#[must_use]
pub fn topmost_hit<'a, I>(point: Point, pieces: I, radius: f64) -> Option<&'a Piece>
where
    I: IntoIterator<Item = &'a Piece>,
{
    pieces
        .into_iter()
        .filter(|piece| is_hit(point, piece, radius))
        .fold(None, |best: Option<&'a Piece>, piece| match best {
            Some(b) if b.z_index >= piece.z_index => Some(b),
            _ => Some(piece),
        })
}
