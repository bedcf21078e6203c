#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// to_logical
// =============================================================

#[test]
fn identity_maps_client_to_logical_unchanged() {
    let adapter = SurfaceAdapter::identity(800.0, 600.0);
    assert_eq!(adapter.to_logical(123.0, 456.0), Point::new(123.0, 456.0));
}

#[test]
fn to_logical_subtracts_canvas_origin() {
    let adapter = SurfaceAdapter::new(50.0, 20.0, 800.0, 600.0, 800.0, 600.0, 2.0);
    assert_eq!(adapter.to_logical(150.0, 120.0), Point::new(100.0, 100.0));
}

#[test]
fn to_logical_is_independent_of_dpr() {
    let a = SurfaceAdapter::new(10.0, 10.0, 800.0, 600.0, 800.0, 600.0, 1.0);
    let b = SurfaceAdapter::new(10.0, 10.0, 800.0, 600.0, 800.0, 600.0, 3.0);
    assert_eq!(a.to_logical(210.0, 160.0), b.to_logical(210.0, 160.0));
}

#[test]
fn to_logical_scales_when_css_size_differs() {
    // Displayed at half size: one CSS pixel covers two logical units.
    let adapter = SurfaceAdapter::new(0.0, 0.0, 400.0, 300.0, 800.0, 600.0, 1.0);
    assert_eq!(adapter.to_logical(100.0, 50.0), Point::new(200.0, 100.0));
}

// =============================================================
// Backing store
// =============================================================

#[test]
fn backing_size_multiplies_by_dpr() {
    let adapter = SurfaceAdapter::new(0.0, 0.0, 800.0, 600.0, 800.0, 600.0, 2.0);
    assert_eq!(adapter.backing_size(), (1600, 1200));
    assert_eq!(adapter.backing_scale(), (2.0, 2.0));
}

#[test]
fn backing_size_rounds_fractional_dpr() {
    let adapter = SurfaceAdapter::new(0.0, 0.0, 801.0, 600.0, 801.0, 600.0, 1.5);
    assert_eq!(adapter.backing_size(), (1202, 900));
}

#[test]
fn backing_scale_accounts_for_css_scaling() {
    let adapter = SurfaceAdapter::new(0.0, 0.0, 400.0, 300.0, 800.0, 600.0, 2.0);
    assert_eq!(adapter.backing_size(), (800, 600));
    assert_eq!(adapter.backing_scale(), (1.0, 1.0));
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn zero_css_size_falls_back_to_logical() {
    let adapter = SurfaceAdapter::new(0.0, 0.0, 0.0, 0.0, 800.0, 600.0, 1.0);
    assert_eq!(adapter.css_width, 800.0);
    assert_eq!(adapter.css_height, 600.0);
    assert_eq!(adapter.to_logical(10.0, 10.0), Point::new(10.0, 10.0));
}

#[test]
fn invalid_dpr_falls_back_to_one() {
    assert_eq!(SurfaceAdapter::new(0.0, 0.0, 800.0, 600.0, 800.0, 600.0, 0.0).dpr, 1.0);
    assert_eq!(SurfaceAdapter::new(0.0, 0.0, 800.0, 600.0, 800.0, 600.0, f64::NAN).dpr, 1.0);
}
