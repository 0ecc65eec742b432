use crate::layout;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a host page element, logging when the page does not provide it.
pub fn element(document: &web::Document, element_id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(element_id);
    if el.is_none() {
        log::warn!("[dom] missing #{}", element_id);
    }
    el
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = element(document, element_id) {
        add_element_click_listener(&el, handler);
    }
}

pub fn add_element_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `handler` when a key for which `accepts` holds is pressed while `el`
/// has focus. The key's default action is suppressed.
pub fn add_element_key_listener(
    el: &web::Element,
    accepts: fn(&str) -> bool,
    mut handler: impl FnMut() + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if accepts(&ev.key()) {
            ev.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = element(document, element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = element(document, element_id) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

/// Size the canvas backing store to its CSS box times `pixel_ratio`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f32) {
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = layout::backing_size(rect.width(), rect.height(), pixel_ratio);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
        log::debug!("[dom] canvas backing {}x{} @ {:.1}x", w_px, h_px, pixel_ratio);
    }
}

/// Replace whatever canvas the stage holds with a fresh one.
pub fn mount_fresh_canvas(stage: &web::Element) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = stage
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("stage has no document"))?;
    clear_children(stage);
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let _ = canvas.set_attribute("class", "viewer-canvas");
    stage
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn clear_children(el: &web::Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}
