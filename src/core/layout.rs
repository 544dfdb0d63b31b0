// Side-by-side placement of the two spheres plus camera distance.

/// Gap between the spheres' facing edges, as a fraction of the larger radius.
pub const GAP_FACTOR: f32 = 1.2;

/// Camera distance terms: scale on the larger radius plus a fixed margin.
pub const CAMERA_RADIUS_FACTOR: f32 = 2.2;
pub const CAMERA_MARGIN: f32 = 2.5;

#[derive(Clone, Copy, Debug)]
pub struct SceneLayout {
    /// World-space X of the subject (fat) sphere centre.
    pub subject_x: f32,
    /// World-space X of the reference sphere centre.
    pub reference_x: f32,
    /// View-axis camera translation (negative: scene sits in front of the eye).
    pub camera_z: f32,
}

impl SceneLayout {
    /// Centre the pair around the origin with an exact edge-to-edge gap of
    /// `max(r1, r2) * GAP_FACTOR`, and back the camera off far enough that
    /// both spheres stay inside the frustum for any radius ratio.
    pub fn compute(subject_radius: f32, reference_radius: f32) -> Self {
        let max_r = subject_radius.max(reference_radius);
        let gap = max_r * GAP_FACTOR;
        let span = 2.0 * subject_radius + gap + 2.0 * reference_radius;
        Self {
            subject_x: -span / 2.0 + subject_radius,
            reference_x: span / 2.0 - reference_radius,
            camera_z: -(max_r * CAMERA_RADIUS_FACTOR + CAMERA_MARGIN),
        }
    }
}
