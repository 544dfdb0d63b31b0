// Host-side tests for pointer coordinate conversion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::ndc_from_css;

#[test]
fn centre_maps_to_origin() {
    let ndc = ndc_from_css(200.0, 150.0, 400.0, 300.0);
    assert!(ndc.x.abs() < 1e-6);
    assert!(ndc.y.abs() < 1e-6);
}

#[test]
fn corners_map_to_unit_extremes() {
    // CSS y grows downward; NDC y grows upward.
    let top_left = ndc_from_css(0.0, 0.0, 400.0, 300.0);
    assert!((top_left.x + 1.0).abs() < 1e-6);
    assert!((top_left.y - 1.0).abs() < 1e-6);

    let bottom_right = ndc_from_css(400.0, 300.0, 400.0, 300.0);
    assert!((bottom_right.x - 1.0).abs() < 1e-6);
    assert!((bottom_right.y + 1.0).abs() < 1e-6);
}

#[test]
fn degenerate_surface_maps_to_the_centre() {
    assert_eq!(ndc_from_css(10.0, 10.0, 0.0, 300.0), glam::Vec2::ZERO);
    assert_eq!(ndc_from_css(10.0, 10.0, 400.0, 0.0), glam::Vec2::ZERO);
    assert_eq!(ndc_from_css(10.0, 10.0, -1.0, -1.0), glam::Vec2::ZERO);
}
