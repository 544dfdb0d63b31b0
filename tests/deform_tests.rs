// Host-side tests for the procedural displacement and shading math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod deform {
    include!("../src/core/deform.rs");
}

use deform::*;
use glam::Vec3;

#[test]
fn pulse_decay_is_exactly_one_at_zero_elapsed() {
    assert_eq!(pulse_decay(0.0), 1.0);
}

#[test]
fn pulse_contributes_nothing_outside_its_window() {
    for elapsed in [-0.5f32, -1e-6, 1.5, 2.0, 100.0] {
        assert_eq!(pulse_ripple(0.37, elapsed, 1.0), 0.0, "elapsed={elapsed}");
        assert_eq!(pulse_ring(0.37, elapsed), 0.0, "elapsed={elapsed}");
    }
}

#[test]
fn pulse_is_live_just_inside_the_window() {
    // Seed chosen so neither sine lands on a zero crossing.
    let seed = 0.37;
    assert!(pulse_ripple(seed, 0.0, 1.0).abs() > 0.0);
    assert!(pulse_ripple(seed, 1.4999, 1.0).abs() > 0.0);
}

#[test]
fn ripple_at_zero_elapsed_matches_the_closed_form() {
    let seed = 0.2;
    let radius = 0.5;
    let expected = (seed * 2.0 * std::f32::consts::PI).sin() * radius * 0.06;
    assert!((pulse_ripple(seed, 0.0, radius) - expected).abs() < 1e-6);
}

#[test]
fn wobble_is_suppressed_for_solid_instances() {
    assert_eq!(wobble(0.4, 3.7, 1.0, 1.0), 0.0);
    assert!(wobble(0.4, 3.7, 1.0, 0.0).abs() > 0.0);
}

#[test]
fn wobble_scales_with_radius() {
    let small = wobble(0.4, 1.0, 0.5, 0.0);
    let large = wobble(0.4, 1.0, 2.0, 0.0);
    assert!((large - 4.0 * small).abs() < 1e-6);
}

#[test]
fn bulge_is_dead_for_tiny_pointer_vectors() {
    let n = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(pointer_bulge(n, Vec3::ZERO, 1.0, 1.0), 0.0);
    assert_eq!(pointer_bulge(n, Vec3::splat(1e-4), 1.0, 1.0), 0.0);
}

#[test]
fn bulge_peaks_where_the_surface_faces_the_pointer() {
    let dir = Vec3::new(0.0, 0.0, 1.0);
    let facing = pointer_bulge(Vec3::new(0.0, 0.0, 1.0), dir, 1.0, 1.0);
    let oblique = pointer_bulge(Vec3::new(0.7, 0.0, 0.7), dir, 1.0, 1.0);
    let opposite = pointer_bulge(Vec3::new(0.0, 0.0, -1.0), dir, 1.0, 1.0);
    assert!((facing - 0.6).abs() < 1e-6); // max(1,0)^16 * 1 * 1 * 0.6
    assert!(oblique > 0.0 && oblique < facing * 0.01, "lobe not narrow");
    assert_eq!(opposite, 0.0);
}

#[test]
fn bulge_scales_with_strength() {
    let n = Vec3::new(0.0, 0.0, 1.0);
    let dir = Vec3::new(0.0, 0.0, 2.0); // unnormalized input is fine
    let half = pointer_bulge(n, dir, 0.5, 1.0);
    let full = pointer_bulge(n, dir, 1.0, 1.0);
    assert!((full - 2.0 * half).abs() < 1e-6);
}

#[test]
fn displace_sums_the_three_terms() {
    let seed = 0.61;
    let t = 2.25;
    let normal = Vec3::new(0.0, 1.0, 0.0);
    let dir = Vec3::new(0.1, 0.9, 0.3);
    let radius = 0.8;
    let elapsed = 0.4;

    let d = displace(seed, normal, t, dir, 0.7, elapsed, radius, 0.0);
    let expected = wobble(seed, t, radius, 0.0)
        + pointer_bulge(normal, dir, 0.7, radius)
        + pulse_ripple(seed, elapsed, radius);
    assert!((d.offset - expected).abs() < 1e-6);
    assert!((d.color_pulse - pulse_ring(seed, elapsed)).abs() < 1e-6);
}

#[test]
fn lighting_stays_in_the_ambient_to_full_range() {
    for n in [
        Vec3::new(0.5, 0.8, 1.0),
        Vec3::new(-0.5, -0.8, -1.0),
        Vec3::X,
        Vec3::NEG_Y,
    ] {
        let l = lighting(n);
        assert!((0.35..=1.0 + 1e-6).contains(&l), "lighting {l} for {n:?}");
    }
    // Facing the light exactly: ambient + full diffuse.
    assert!((lighting(Vec3::new(0.5, 0.8, 1.0)) - 1.0).abs() < 1e-6);
}

#[test]
fn solid_shading_has_no_variation_or_pulse() {
    let base = Vec3::new(0.45, 0.66, 0.72);
    let normal = Vec3::new(0.2, 0.9, 0.4);
    let lit = lighting(normal);
    let shaded = shade(base, normal, 0.83, 12.7, 0.9, 1.0);
    // Solid instances render as plain lit color no matter the seed, time or
    // pulse intensity.
    assert!((shaded - base * lit).length() < 1e-6);
}

#[test]
fn pulse_blends_the_subject_toward_white() {
    let base = Vec3::new(0.90, 0.71, 0.04);
    let normal = Vec3::new(0.0, 1.0, 0.0);
    let quiet = shade(base, normal, 0.5, 1.0, 0.0, 0.0);
    let flashed = shade(base, normal, 0.5, 1.0, 1.0, 0.0);
    // A full-intensity ring pushes every channel toward the white mix.
    assert!(flashed.min_element() > quiet.min_element());
}
