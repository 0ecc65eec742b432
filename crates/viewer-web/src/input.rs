use crate::constants::{WHEEL_MAX_NOTCHES, WHEEL_NOTCH_PX};
use glam::Vec2;
use std::f32::consts::TAU;
use viewer_core::{ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP};

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous event for the captured pointer.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Map a drag in CSS pixels to orbit angle deltas `(d_theta, d_phi)`.
/// Dragging the full height of the stage turns the camera once around.
#[inline]
pub fn drag_to_orbit(delta: Vec2, stage_height_px: f32) -> (f32, f32) {
    if !stage_height_px.is_finite() || stage_height_px <= 0.0 || !delta.is_finite() {
        return (0.0, 0.0);
    }
    let k = TAU * ORBIT_ROTATE_SPEED / stage_height_px;
    (-delta.x * k, -delta.y * k)
}

/// Map a wheel `deltaY` to a distance scale. Scrolling up moves closer.
#[inline]
pub fn wheel_to_zoom(delta_y: f32) -> f32 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    let notches = (delta_y / WHEEL_NOTCH_PX).clamp(-WHEEL_MAX_NOTCHES, WHEEL_MAX_NOTCHES);
    ORBIT_ZOOM_STEP.powf(-notches)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Back,
    Reset,
    Retry,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Back),
        "r" | "R" => Some(KeyAction::Reset),
        "Enter" => Some(KeyAction::Retry),
        _ => None,
    }
}

/// Keys that select a focused catalog card.
#[inline]
pub fn activates_card(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
