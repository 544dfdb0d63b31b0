// Procedural surface math, CPU side.
//
// This module is the authoritative statement of the displacement and shading
// formulas; `shaders/blob.wgsl` reproduces them term for term on the GPU.
// Any change here must be mirrored there.

use glam::Vec3;

/// Seconds a click pulse contributes to geometry and color.
pub const PULSE_WINDOW_SEC: f32 = 1.5;

/// Pointer direction magnitudes at or below this contribute no bulge.
pub const POINTER_DEADZONE: f32 = 1e-3;

/// Fixed directional light used by the fragment stage.
pub const LIGHT_DIR: [f32; 3] = [0.5, 0.8, 1.0];

/// Outcome of evaluating the surface at one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Deformation {
    /// Scalar offset applied along the (unnormalized) vertex normal.
    pub offset: f32,
    /// Intensity of the traveling white-flash ring, in [0, 1].
    pub color_pulse: f32,
}

/// Layered idle wobble: three sines at different seed/time frequencies.
/// Fully suppressed when `solid` is 1.
#[inline]
pub fn wobble(seed: f32, t: f32, radius: f32, solid: f32) -> f32 {
    let wave1 = (seed * 12.0 + t * 0.8).sin() * 0.012;
    let wave2 = (seed * 7.0 - t * 0.5).sin() * 0.018;
    let wave3 = (seed * 20.0 + t * 1.2).sin() * 0.006;
    (wave1 + wave2 + wave3) * radius * (1.0 - solid)
}

/// Narrow outward lobe on the surface region facing the pointer.
/// Zero when the pointer direction is inside the dead zone.
#[inline]
pub fn pointer_bulge(normal: Vec3, pointer_dir: Vec3, strength: f32, radius: f32) -> f32 {
    let len = pointer_dir.length();
    if len <= POINTER_DEADZONE {
        return 0.0;
    }
    let alignment = normal.normalize().dot(pointer_dir / len);
    alignment.max(0.0).powf(16.0) * strength * radius * 0.6
}

/// Exponential envelope of the click pulse; 1.0 exactly at elapsed = 0,
/// and defined only inside the pulse window.
#[inline]
pub fn pulse_decay(elapsed: f32) -> f32 {
    (-elapsed * 3.0).exp()
}

#[inline]
fn pulse_live(elapsed: f32) -> bool {
    (0.0..PULSE_WINDOW_SEC).contains(&elapsed)
}

/// Geometric ripple ring propagating across the surface after a click.
/// Exactly zero outside the pulse window.
#[inline]
pub fn pulse_ripple(seed: f32, elapsed: f32, radius: f32) -> f32 {
    if !pulse_live(elapsed) {
        return 0.0;
    }
    let phase = seed * 2.0 * std::f32::consts::PI - elapsed * 4.0;
    phase.sin() * pulse_decay(elapsed) * radius * 0.06
}

/// Color counterpart of the ripple: a white flash ring, geometry-independent.
#[inline]
pub fn pulse_ring(seed: f32, elapsed: f32) -> f32 {
    if !pulse_live(elapsed) {
        return 0.0;
    }
    (seed * 12.0 - elapsed * 8.0).sin().max(0.0) * pulse_decay(elapsed)
}

/// Full per-vertex evaluation: wobble + pointer bulge + pulse ripple, plus
/// the color-pulse intensity consumed by shading.
pub fn displace(
    seed: f32,
    normal: Vec3,
    t: f32,
    pointer_dir: Vec3,
    pointer_strength: f32,
    pulse_elapsed: f32,
    radius: f32,
    solid: f32,
) -> Deformation {
    let offset = wobble(seed, t, radius, solid)
        + pointer_bulge(normal, pointer_dir, pointer_strength, radius)
        + pulse_ripple(seed, pulse_elapsed, radius);
    Deformation {
        offset,
        color_pulse: pulse_ring(seed, pulse_elapsed),
    }
}

/// Ambient + diffuse term of the fragment stage.
#[inline]
pub fn lighting(normal: Vec3) -> f32 {
    let light_dir = Vec3::from(LIGHT_DIR).normalize();
    0.35 + 0.65 * normal.normalize().dot(light_dir).max(0.0)
}

/// Final surface color: lit base with subtle seed/time variation, blended
/// toward white by the pulse ring. `solid` disables both the variation and
/// the pulse blend.
pub fn shade(
    base_color: Vec3,
    normal: Vec3,
    seed: f32,
    t: f32,
    color_pulse: f32,
    solid: f32,
) -> Vec3 {
    let lit = lighting(normal);
    let variation = (seed * 15.0 + t * 0.3).sin() * 0.05 * (1.0 - solid);
    let color = base_color * (lit + variation);
    let pulse_color = base_color.lerp(Vec3::ONE, 0.6) * lit;
    color.lerp(pulse_color, color_pulse * (1.0 - solid))
}
