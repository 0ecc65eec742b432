use glam::Vec3;

// Shared viewer tuning constants used by the web frontend and the core state machine.

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 1.0, 3.0]; // initial eye position before framing
pub const CAMERA_FOV_DEG: f32 = 50.0; // vertical field of view
pub const CAMERA_ZNEAR: f32 = 0.05;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.1; // fraction of the pending delta applied per update
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full stage height drag = one full turn * speed
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance scale per wheel notch
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps the polar angle off the poles
pub const ORBIT_SETTLE_EPSILON: f32 = 1e-5; // pending deltas below this are dropped

// Staging
pub const STAGE_FIT_MARGIN: f32 = 1.25; // framed distance multiplier around the bounding sphere
pub const STAGE_LIGHT_INTENSITY: f32 = 0.8;

// Render resolution scale (pixel ratio) per quality level
pub const DPR_STANDARD: f32 = 1.5;
pub const DPR_HIGH: f32 = 2.0;

// Performance monitor
pub const PERF_WINDOW_MS: u64 = 250; // length of one frame-rate sample window
pub const PERF_ITERATIONS: usize = 10; // windows collected before a decision
pub const PERF_THRESHOLD: f32 = 0.75; // fraction of windows that must agree
pub const PERF_REFRESH_HISTORY: usize = 30; // windows feeding the refresh-rate median
pub const PERF_HIGH_REFRESH_HZ: f32 = 100.0; // displays above this use the high bounds
pub const PERF_BOUNDS_HIGH_REFRESH: (f32, f32) = (60.0, 90.0);
pub const PERF_BOUNDS_STANDARD: (f32, f32) = (40.0, 55.0);

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::new(CAMERA_START[0], CAMERA_START[1], CAMERA_START[2])
}
