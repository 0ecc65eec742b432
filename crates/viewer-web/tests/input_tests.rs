// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use std::f32::consts::TAU;

#[test]
fn drag_across_full_height_is_one_turn() {
    let (d_theta, d_phi) = drag_to_orbit(Vec2::new(400.0, 0.0), 400.0);
    assert!((d_theta + TAU * viewer_core::ORBIT_ROTATE_SPEED).abs() < 1e-5);
    assert_eq!(d_phi, 0.0);
}

#[test]
fn drag_down_lowers_polar_angle() {
    let (d_theta, d_phi) = drag_to_orbit(Vec2::new(0.0, 10.0), 500.0);
    assert_eq!(d_theta, 0.0);
    assert!(d_phi < 0.0);
}

#[test]
fn degenerate_drags_do_nothing() {
    assert_eq!(drag_to_orbit(Vec2::new(5.0, 5.0), 0.0), (0.0, 0.0));
    assert_eq!(drag_to_orbit(Vec2::new(5.0, 5.0), f32::NAN), (0.0, 0.0));
    assert_eq!(drag_to_orbit(Vec2::new(f32::INFINITY, 0.0), 300.0), (0.0, 0.0));
}

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    assert!(wheel_to_zoom(-100.0) < 1.0);
    assert!(wheel_to_zoom(100.0) > 1.0);
    assert_eq!(wheel_to_zoom(0.0), 1.0);
    assert!((wheel_to_zoom(-100.0) - viewer_core::ORBIT_ZOOM_STEP).abs() < 1e-6);
}

#[test]
fn wheel_zoom_is_bounded_and_finite() {
    let huge = wheel_to_zoom(1.0e9);
    let capped = wheel_to_zoom(constants::WHEEL_NOTCH_PX * constants::WHEEL_MAX_NOTCHES);
    assert_eq!(huge, capped);
    assert_eq!(wheel_to_zoom(f32::NAN), 1.0);
    assert!(wheel_to_zoom(-1.0e9) > 0.0);
}

#[test]
fn drag_tracks_only_the_captured_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(1, Vec2::new(3.0, 3.0)), None);

    drag.begin(7, Vec2::new(10.0, 10.0));
    assert_eq!(drag.advance(8, Vec2::new(50.0, 50.0)), None);
    assert_eq!(drag.advance(7, Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(drag.advance(7, Vec2::new(15.0, 9.0)), Some(Vec2::new(0.0, 1.0)));

    drag.end(8);
    assert!(drag.active);
    drag.end(7);
    assert!(!drag.active);
    assert_eq!(drag.advance(7, Vec2::new(20.0, 20.0)), None);
}

#[test]
fn keys_map_to_viewer_actions() {
    assert_eq!(key_action("Escape"), Some(KeyAction::Back));
    assert_eq!(key_action("r"), Some(KeyAction::Reset));
    assert_eq!(key_action("R"), Some(KeyAction::Reset));
    assert_eq!(key_action("Enter"), Some(KeyAction::Retry));
    assert_eq!(key_action("x"), None);
    assert_eq!(key_action(" "), None);
}

#[test]
fn enter_and_space_activate_a_focused_card() {
    assert!(activates_card("Enter"));
    assert!(activates_card(" "));
    assert!(activates_card("Spacebar"));
    assert!(!activates_card("Escape"));
    assert!(!activates_card("Tab"));
    assert!(!activates_card("r"));
}
