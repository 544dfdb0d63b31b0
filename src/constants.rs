// Rendering and sizing constants for the visualization mount.

// Sphere tessellation: (SEGMENTS+1)^2 vertices, 6*SEGMENTS^2 indices
pub const SEGMENTS: u32 = 48;

// Camera
pub const FOV_Y_RAD: f32 = std::f32::consts::PI / 5.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Subject sphere color (warm fat-yellow from the product palette)
pub const SUBJECT_COLOR: [f32; 3] = [0.90, 0.71, 0.04];

// Scene background
pub const CLEAR_COLOR: [f64; 3] = [0.102, 0.110, 0.125];

// Responsive canvas sizing: height = min(width * HEIGHT_PER_WIDTH,
// viewport_height * HEIGHT_PER_VIEWPORT)
pub const HEIGHT_PER_WIDTH: f64 = 0.65;
pub const HEIGHT_PER_VIEWPORT: f64 = 0.55;
