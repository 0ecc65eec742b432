//! Camera description and damped orbit controls for the product viewport.
//!
//! These types avoid platform APIs; the web frontend feeds pointer and wheel
//! deltas in and reads matrices out once per frame.

use crate::constants::*;
use crate::mesh::Aabb;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::PI;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_pan: bool,
    pub fovy_radians: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            enable_pan: false,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
        }
    }
}

/// Orbit camera in spherical coordinates around `target`.
///
/// Input accumulates into pending deltas; [`OrbitCamera::update`] applies a
/// `damping` fraction of them each frame so motion eases out instead of
/// stopping dead.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Vec3,
    theta: f32,
    phi: f32,
    distance: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let mut cam = Self {
            config,
            target,
            theta,
            phi,
            distance,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        };
        cam.clamp();
        cam
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.distance
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: self.config.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Queue a rotation: `d_theta` around the vertical axis, `d_phi` toward
    /// the poles.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32) {
        self.pending_theta += d_theta;
        self.pending_phi += d_phi;
    }

    /// Queue a zoom. Values below 1 move closer.
    pub fn zoom(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.pending_scale *= scale;
        }
    }

    /// Move the target in the view plane. Ignored unless panning is enabled.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if !self.config.enable_pan {
            return false;
        }
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.target += (right * delta.x + up * delta.y) * self.distance;
        true
    }

    /// Advance the damped motion by one frame. Returns true while the camera
    /// is still settling.
    pub fn update(&mut self) -> bool {
        let d = self.config.damping.clamp(0.0, 1.0);
        self.theta += self.pending_theta * d;
        self.phi += self.pending_phi * d;
        self.pending_theta *= 1.0 - d;
        self.pending_phi *= 1.0 - d;

        let step = self.pending_scale.powf(d);
        self.distance *= step;
        self.pending_scale /= step;

        if self.pending_theta.abs() < ORBIT_SETTLE_EPSILON {
            self.pending_theta = 0.0;
        }
        if self.pending_phi.abs() < ORBIT_SETTLE_EPSILON {
            self.pending_phi = 0.0;
        }
        if (self.pending_scale - 1.0).abs() < ORBIT_SETTLE_EPSILON {
            self.pending_scale = 1.0;
        }
        self.clamp();
        self.drop_motion_past_limits();
        self.is_moving()
    }

    /// Motion still pushing into a limit the camera already sits on is
    /// discarded, so the next opposite input takes effect immediately.
    fn drop_motion_past_limits(&mut self) {
        let at_top = self.phi <= ORBIT_POLAR_EPSILON;
        let at_bottom = self.phi >= PI - ORBIT_POLAR_EPSILON;
        if (at_top && self.pending_phi < 0.0) || (at_bottom && self.pending_phi > 0.0) {
            self.pending_phi = 0.0;
        }
        let at_far = self.distance >= self.config.max_distance;
        let at_near = self.distance <= self.config.min_distance;
        if (at_far && self.pending_scale > 1.0) || (at_near && self.pending_scale < 1.0) {
            self.pending_scale = 1.0;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.pending_theta != 0.0 || self.pending_phi != 0.0 || self.pending_scale != 1.0
    }

    /// Center on `bounds` and back off until the bounding sphere fits the
    /// vertical field of view, keeping the current viewing direction.
    pub fn frame(&mut self, bounds: &Aabb) {
        if bounds.is_empty() {
            return;
        }
        self.target = bounds.center();
        let half_fov = (self.config.fovy_radians * 0.5).max(1e-3);
        self.distance = bounds.radius() * STAGE_FIT_MARGIN / half_fov.sin();
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_scale = 1.0;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.phi = self.phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.distance = self.distance.clamp(self.config.min_distance, self.config.max_distance);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(camera_start_vec3(), Vec3::ZERO, OrbitConfig::default())
    }
}
