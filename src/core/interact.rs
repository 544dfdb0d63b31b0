// Pointer/click state shared between event handlers and the frame loop.
//
// Handlers overwrite the raw snapshot synchronously (last value wins, no
// queueing); the frame loop advances the smoothed values exactly once per
// frame. Everything runs on one thread, so the per-frame read is always
// consistent.

/// Per-frame blend factor for smoothed pointer position.
pub const POINTER_POS_ALPHA: f32 = 0.08;
/// Per-frame blend factor for smoothed pointer strength. Slower than the
/// position alpha so direction responds faster than intensity.
pub const POINTER_STRENGTH_ALPHA: f32 = 0.06;

/// Pulse timestamp meaning "no click has happened"; far enough in the past
/// that the 1.5 s pulse window can never match it.
pub const NO_PULSE: f32 = -10.0;

#[derive(Clone, Copy, Default)]
pub struct PointerRaw {
    /// Normalized device coordinates, x right / y up, in [-1, 1].
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

#[derive(Clone, Copy)]
pub struct InteractionState {
    pub raw: PointerRaw,
    pub smoothed_x: f32,
    pub smoothed_y: f32,
    pub smoothed_strength: f32,
    /// Frame-clock timestamp (seconds) of the most recent click.
    pub pulse_time: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            raw: PointerRaw::default(),
            smoothed_x: 0.0,
            smoothed_y: 0.0,
            smoothed_strength: 0.0,
            pulse_time: NO_PULSE,
        }
    }
}

impl InteractionState {
    pub fn pointer_moved(&mut self, ndc_x: f32, ndc_y: f32) {
        self.raw.x = ndc_x;
        self.raw.y = ndc_y;
        self.raw.active = true;
    }

    pub fn pointer_left(&mut self) {
        self.raw.active = false;
    }

    pub fn clicked(&mut self, now_sec: f32) {
        self.pulse_time = now_sec;
    }

    /// One exponential low-pass step toward the current target. Not a spring:
    /// no overshoot, and |smoothed - target| contracts by (1 - alpha) each
    /// frame while the target holds.
    pub fn step(&mut self) {
        let (tx, ty, ts) = if self.raw.active {
            (self.raw.x, self.raw.y, 1.0)
        } else {
            (0.0, 0.0, 0.0)
        };
        self.smoothed_x += (tx - self.smoothed_x) * POINTER_POS_ALPHA;
        self.smoothed_y += (ty - self.smoothed_y) * POINTER_POS_ALPHA;
        self.smoothed_strength += (ts - self.smoothed_strength) * POINTER_STRENGTH_ALPHA;
    }

    /// Direction uniform for the bulge; fixed +0.5 z bias tips the lobe
    /// toward the camera side of the sphere.
    #[inline]
    pub fn pointer_dir(&self) -> [f32; 3] {
        [self.smoothed_x, self.smoothed_y, 0.5]
    }
}
