// Mass -> geometry mapping for the subject sphere.

/// Cubic centimetres of displayed volume per pound of fat mass.
///
/// Carried over verbatim from the original visualization for visual parity.
/// It folds an unstated tissue-density assumption into a unit conversion and
/// is not physically validated; treat it as a tuning constant, not physics.
pub const CM3_PER_LB: f32 = 454.0;

/// Scene scale: one world unit spans this many centimetres.
pub const CM_PER_WORLD_UNIT: f32 = 50.0;

/// Smallest radius the subject sphere may render at, so near-zero mass never
/// produces invisible or degenerate geometry.
pub const MIN_SCENE_RADIUS: f32 = 0.15;

#[inline]
pub fn cm_to_world(cm: f32) -> f32 {
    cm / CM_PER_WORLD_UNIT
}

/// Convert an estimated fat mass in pounds to a world-unit sphere radius.
///
/// Non-finite or negative mass is coerced to zero rather than propagated;
/// undefined geometry would otherwise surface as non-finite transforms.
/// The result is floored at [`MIN_SCENE_RADIUS`].
pub fn scene_radius_from_mass_lbs(mass_lbs: f32) -> f32 {
    let mass = if mass_lbs.is_finite() && mass_lbs > 0.0 {
        mass_lbs
    } else {
        0.0
    };
    let volume_cm3 = mass * CM3_PER_LB;
    let radius_cm = (3.0 * volume_cm3 / (4.0 * std::f32::consts::PI)).cbrt();
    cm_to_world(radius_cm).max(MIN_SCENE_RADIUS)
}
