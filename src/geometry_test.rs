#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::PIECE_RADIUS;

fn piece(id: &str, x: f64, y: f64, z_index: i64) -> Piece {
    Piece { id: id.to_string(), position: Point::new(x, y), color: "#FF4444".to_string(), z_index }
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_sub_gives_offset() {
    assert_eq!(Point::new(102.0, 102.0) - Point::new(105.0, 105.0), Point::new(-3.0, -3.0));
}

#[test]
fn point_add_then_sub_returns_original() {
    let p = Point::new(3.5, -7.25);
    let d = Point::new(10.0, 4.0);
    assert_eq!(p + d - d, p);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// =============================================================
// distance_squared
// =============================================================

#[test]
fn distance_squared_three_four_five() {
    assert_eq!(distance_squared(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 25.0);
}

#[test]
fn distance_squared_is_symmetric() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(-4.0, 9.0);
    assert_eq!(distance_squared(a, b), distance_squared(b, a));
}

#[test]
fn distance_squared_same_point_is_zero() {
    let a = Point::new(42.0, 42.0);
    assert_eq!(distance_squared(a, a), 0.0);
}

// =============================================================
// is_hit
// =============================================================

#[test]
fn is_hit_center() {
    assert!(is_hit(Point::new(100.0, 100.0), &piece("a", 100.0, 100.0, 0), PIECE_RADIUS));
}

#[test]
fn is_hit_exactly_on_radius() {
    assert!(is_hit(Point::new(120.0, 100.0), &piece("a", 100.0, 100.0, 0), PIECE_RADIUS));
}

#[test]
fn is_hit_just_outside_radius() {
    let p = piece("a", 100.0, 100.0, 0);
    assert!(!is_hit(Point::new(120.0 + 1e-6, 100.0), &p, PIECE_RADIUS));
    assert!(!is_hit(Point::new(100.0, 79.999), &p, PIECE_RADIUS));
}

#[test]
fn is_hit_diagonal_inside_and_outside() {
    let p = piece("a", 0.0, 0.0, 0);
    // 14^2 + 14^2 = 392 <= 400
    assert!(is_hit(Point::new(14.0, 14.0), &p, PIECE_RADIUS));
    // 15^2 + 15^2 = 450 > 400
    assert!(!is_hit(Point::new(15.0, 15.0), &p, PIECE_RADIUS));
}

// =============================================================
// topmost_hit
// =============================================================

#[test]
fn topmost_hit_none_when_empty() {
    let pieces: Vec<Piece> = Vec::new();
    assert!(topmost_hit(Point::new(0.0, 0.0), &pieces, PIECE_RADIUS).is_none());
}

#[test]
fn topmost_hit_none_when_missed() {
    let pieces = vec![piece("1", 100.0, 100.0, 1), piece("2", 200.0, 150.0, 2)];
    assert!(topmost_hit(Point::new(500.0, 500.0), &pieces, PIECE_RADIUS).is_none());
}

#[test]
fn topmost_hit_prefers_higher_z() {
    let pieces = vec![piece("1", 100.0, 100.0, 1), piece("2", 105.0, 105.0, 2)];
    let hit = topmost_hit(Point::new(102.0, 102.0), &pieces, PIECE_RADIUS);
    assert_eq!(hit.map(|p| p.id.as_str()), Some("2"));
}

#[test]
fn topmost_hit_prefers_higher_z_regardless_of_input_order() {
    let pieces = vec![piece("hi", 105.0, 105.0, 9), piece("lo", 100.0, 100.0, 1)];
    let hit = topmost_hit(Point::new(102.0, 102.0), &pieces, PIECE_RADIUS);
    assert_eq!(hit.map(|p| p.id.as_str()), Some("hi"));
}

#[test]
fn topmost_hit_tie_resolves_to_first_in_order() {
    let pieces = vec![piece("first", 100.0, 100.0, 5), piece("second", 101.0, 101.0, 5)];
    let hit = topmost_hit(Point::new(100.5, 100.5), &pieces, PIECE_RADIUS);
    assert_eq!(hit.map(|p| p.id.as_str()), Some("first"));
}

#[test]
fn topmost_hit_ignores_higher_z_that_misses() {
    let pieces = vec![piece("near", 0.0, 0.0, 1), piece("far", 300.0, 300.0, 99)];
    let hit = topmost_hit(Point::new(5.0, 5.0), &pieces, PIECE_RADIUS);
    assert_eq!(hit.map(|p| p.id.as_str()), Some("near"));
}

#[test]
fn topmost_hit_respects_custom_radius() {
    let pieces = vec![piece("a", 0.0, 0.0, 0)];
    assert!(topmost_hit(Point::new(30.0, 0.0), &pieces, 40.0).is_some());
    assert!(topmost_hit(Point::new(30.0, 0.0), &pieces, 20.0).is_none());
}
