use crate::constants::*;
use crate::dom;
use crate::input::{self, DragState, KeyAction};
use crate::overlay;
use crate::viewer::Viewer;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::ViewPhase;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_css_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Apply `f` to the camera when the model is on screen.
fn with_ready_camera(viewer: &Viewer, f: impl FnOnce(&mut viewer_core::OrbitCamera)) {
    let mut app = viewer.app.borrow_mut();
    if let Some(session) = app.session_mut() {
        if *session.phase() == ViewPhase::Ready {
            f(session.camera_mut());
        }
    }
}

pub fn wire_buttons(viewer: &Viewer) {
    let v = viewer.clone();
    dom::add_click_listener(&viewer.document, ID_VIEWER_BACK, move || v.back());
    let v = viewer.clone();
    dom::add_click_listener(&viewer.document, ID_VIEWER_RESET, move || v.reset_view());
    let v = viewer.clone();
    dom::add_click_listener(&viewer.document, ID_VIEWER_RETRY, move || {
        v.retry();
    });
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, viewer: &Viewer) {
    if overlay::is_hidden(&viewer.document, ID_VIEWER) {
        return;
    }
    match input::key_action(&ev.key()) {
        Some(KeyAction::Back) => viewer.back(),
        Some(KeyAction::Reset) => viewer.reset_view(),
        Some(KeyAction::Retry) => {
            if viewer.retry() {
                ev.prevent_default();
            }
        }
        None => {}
    }
}

pub fn wire_global_keydown(viewer: Viewer) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &viewer);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the live canvas backing store in step with its CSS box.
pub fn wire_resize(viewer: Viewer) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            let ratio = viewer.pixel_ratio();
            if let Some(stage) = viewer.stage.borrow().as_ref() {
                dom::sync_canvas_backing_size(&stage.canvas, ratio);
            }
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Orbit and zoom input. Listeners sit on the stage container so they
/// survive the canvas being replaced on reset.
pub fn wire_stage_input(viewer: &Viewer) {
    let stage_el = match dom::element(&viewer.document, ID_VIEWER_STAGE) {
        Some(el) => el,
        None => return,
    };
    let drag = Rc::new(RefCell::new(DragState::default()));

    // pointerdown
    {
        let drag = drag.clone();
        let target = stage_el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().begin(ev.pointer_id(), pointer_css_px(&ev));
            let _ = target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = stage_el
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag = drag.clone();
        let v = viewer.clone();
        let target = stage_el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let delta = match drag
                .borrow_mut()
                .advance(ev.pointer_id(), pointer_css_px(&ev))
            {
                Some(d) => d,
                None => return,
            };
            let height = target.get_bounding_client_rect().height() as f32;
            let (d_theta, d_phi) = input::drag_to_orbit(delta, height);
            with_ready_camera(&v, |cam| cam.rotate(d_theta, d_phi));
        }) as Box<dyn FnMut(_)>);
        let _ = stage_el
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let target = stage_el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            let _ = target.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        let _ = stage_el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel
    {
        let v = viewer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let scale = input::wheel_to_zoom(ev.delta_y() as f32);
            with_ready_camera(&v, |cam| cam.zoom(scale));
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            stage_el.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
