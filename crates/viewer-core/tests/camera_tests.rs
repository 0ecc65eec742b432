// Host-side tests for the damped orbit camera.

use glam::{Vec2, Vec3};
use viewer_core::*;

fn settle(cam: &mut OrbitCamera) -> usize {
    let mut steps = 0;
    while cam.update() {
        steps += 1;
        assert!(steps < 10_000, "camera never settled");
    }
    steps
}

#[test]
fn default_camera_starts_at_configured_eye() {
    let cam = OrbitCamera::default();
    assert!((cam.eye() - camera_start_vec3()).length() < 1e-5);
    assert_eq!(cam.target(), Vec3::ZERO);
    assert!((cam.distance() - 10f32.sqrt()).abs() < 1e-5);
    assert!(!cam.is_moving());
}

#[test]
fn default_config_matches_constants() {
    let config = OrbitConfig::default();
    assert_eq!(config.damping, ORBIT_DAMPING);
    assert_eq!(config.min_distance, ORBIT_MIN_DISTANCE);
    assert_eq!(config.max_distance, ORBIT_MAX_DISTANCE);
    assert!(!config.enable_pan);
    assert!((config.fovy_radians - CAMERA_FOV_DEG.to_radians()).abs() < 1e-6);
}

#[test]
fn rotation_is_damped_not_instant() {
    let mut cam = OrbitCamera::default();
    let start = cam.eye();
    cam.rotate(1.0, 0.0);
    assert_eq!(cam.eye(), start, "input alone does not move the camera");

    assert!(cam.update());
    let after_one = cam.eye();
    assert_ne!(after_one, start);

    settle(&mut cam);
    let end = cam.eye();
    // One step covers roughly the damping fraction of the full turn.
    let first_step = (after_one - start).length();
    let total = (end - start).length();
    assert!(first_step < total * 0.5);
    // Distance is preserved by rotation.
    assert!((cam.distance() - 10f32.sqrt()).abs() < 1e-4);
}

#[test]
fn zoom_is_clamped_to_range() {
    let mut cam = OrbitCamera::default();
    for _ in 0..50 {
        cam.zoom(0.5);
    }
    settle(&mut cam);
    assert!((cam.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-4);

    for _ in 0..50 {
        cam.zoom(2.0);
    }
    settle(&mut cam);
    assert!((cam.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-4);
}

#[test]
fn invalid_zoom_is_ignored() {
    let mut cam = OrbitCamera::default();
    cam.zoom(0.0);
    cam.zoom(-1.0);
    cam.zoom(f32::NAN);
    assert!(!cam.is_moving());
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, -10.0);
    settle(&mut cam);
    let eye = cam.eye();
    assert!(eye.y > 0.0);
    assert!(eye.y <= cam.distance());
    let horizontal = Vec2::new(eye.x, eye.z).length();
    assert!(horizontal > 0.0);
}

#[test]
fn zoom_in_responds_right_after_overscrolling_out() {
    let mut cam = OrbitCamera::default();
    for _ in 0..20 {
        cam.zoom(1.6);
    }
    for _ in 0..3 {
        cam.update();
    }
    assert!((cam.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-4);

    for _ in 0..5 {
        cam.zoom(0.6);
    }
    settle(&mut cam);
    assert!(cam.distance() < ORBIT_MAX_DISTANCE - 1.0);
}

#[test]
fn zoom_out_responds_right_after_overscrolling_in() {
    let mut cam = OrbitCamera::default();
    for _ in 0..20 {
        cam.zoom(0.5);
    }
    for _ in 0..5 {
        cam.update();
    }
    assert!((cam.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-4);

    cam.zoom(2.0);
    settle(&mut cam);
    assert!(cam.distance() > ORBIT_MIN_DISTANCE + 0.5);
}

#[test]
fn reverse_drag_leaves_the_pole_immediately() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, -10.0);
    for _ in 0..3 {
        cam.update();
    }
    let top_y = cam.eye().y;
    assert!((top_y - cam.distance()).abs() < 1e-3, "camera should sit at the pole");

    cam.rotate(0.0, 0.5);
    settle(&mut cam);
    assert!(cam.eye().y < top_y - 0.1);
}

#[test]
fn pan_is_disabled_by_default() {
    let mut cam = OrbitCamera::default();
    assert!(!cam.pan(Vec2::new(1.0, 1.0)));
    assert_eq!(cam.target(), Vec3::ZERO);
}

#[test]
fn pan_moves_target_when_enabled() {
    let config = OrbitConfig {
        enable_pan: true,
        ..OrbitConfig::default()
    };
    let mut cam = OrbitCamera::new(camera_start_vec3(), Vec3::ZERO, config);
    assert!(cam.pan(Vec2::new(0.1, 0.0)));
    assert_ne!(cam.target(), Vec3::ZERO);
}

#[test]
fn framing_centers_on_bounds_and_respects_range() {
    let mut cam = OrbitCamera::default();
    let bounds = Aabb::from_min_max(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 2.0, 2.0));
    cam.frame(&bounds);
    assert!((cam.target() - Vec3::new(2.0, 1.5, 1.5)).length() < 1e-5);
    assert!(cam.distance() >= ORBIT_MIN_DISTANCE && cam.distance() <= ORBIT_MAX_DISTANCE);

    let tiny = Aabb::from_min_max(Vec3::splat(-0.001), Vec3::splat(0.001));
    cam.frame(&tiny);
    assert!((cam.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-5);

    let huge = Aabb::from_min_max(Vec3::splat(-100.0), Vec3::splat(100.0));
    cam.frame(&huge);
    assert!((cam.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-5);
}

#[test]
fn framing_keeps_viewing_direction() {
    let mut cam = OrbitCamera::default();
    let dir_before = (cam.eye() - cam.target()).normalize();
    cam.frame(&Aabb::from_min_max(Vec3::splat(-0.5), Vec3::splat(0.5)));
    let dir_after = (cam.eye() - cam.target()).normalize();
    assert!((dir_before - dir_after).length() < 1e-5);
}

#[test]
fn framing_empty_bounds_is_ignored() {
    let mut cam = OrbitCamera::default();
    let eye = cam.eye();
    cam.frame(&Aabb::empty());
    assert_eq!(cam.eye(), eye);
}

#[test]
fn camera_matrices_are_consistent() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let vp = cam.view_projection();
    let clip = vp * cam.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    // The orbit target projects to the center of the screen.
    assert!(ndc.x.abs() < 1e-4);
    assert!(ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
