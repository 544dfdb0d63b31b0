// Host-side tests for the mass -> radius mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod physical {
    include!("../src/core/physical.rs");
}

use physical::*;

#[test]
fn tiny_mass_hits_the_minimum_floor() {
    // 0.1 lb -> 45.4 cm^3 -> ~2.2 cm -> ~0.044 world units, under the floor.
    assert_eq!(scene_radius_from_mass_lbs(0.1), MIN_SCENE_RADIUS);
    assert_eq!(scene_radius_from_mass_lbs(0.0), MIN_SCENE_RADIUS);
}

#[test]
fn bowling_ball_scale_mass_clears_the_floor() {
    // 14 lb -> 6356 cm^3 -> ~11.5 cm -> ~0.23 world units.
    let r = scene_radius_from_mass_lbs(14.0);
    assert!(r > MIN_SCENE_RADIUS);
    assert!((r - 0.231).abs() < 2e-3, "got {r}");
}

#[test]
fn radius_is_monotone_in_mass_above_the_floor() {
    let mut prev = 0.0;
    for mass in [1.0f32, 5.0, 14.0, 40.0, 100.0] {
        let r = scene_radius_from_mass_lbs(mass);
        assert!(r >= prev, "radius shrank at mass={mass}");
        prev = r;
    }
}

#[test]
fn degenerate_mass_is_coerced_to_zero() {
    assert_eq!(scene_radius_from_mass_lbs(f32::NAN), MIN_SCENE_RADIUS);
    assert_eq!(scene_radius_from_mass_lbs(f32::INFINITY), MIN_SCENE_RADIUS);
    assert_eq!(scene_radius_from_mass_lbs(-5.0), MIN_SCENE_RADIUS);
}

#[test]
fn cm_to_world_uses_the_scene_scale() {
    assert_eq!(cm_to_world(50.0), 1.0);
    assert_eq!(cm_to_world(10.9), 10.9 / 50.0);
}
