use crate::constants::*;
use crate::dom;
use crate::layout;
use viewer_core::{Product, ViewPhase};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().remove_1("hidden");
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().add_1("hidden");
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    document
        .get_element_by_id(element_id)
        .map(|el| {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

pub fn show_catalog(document: &web::Document) {
    hide(document, ID_VIEWER);
    show(document, ID_CATALOG_GRID);
}

pub fn show_viewer(document: &web::Document, product: &Product) {
    dom::set_text(document, ID_VIEWER_NAME, product.name);
    dom::set_text(document, ID_VIEWER_PRICE, product.price);
    dom::set_text(document, ID_VIEWER_DESCRIPTION, product.description);
    hide(document, ID_CATALOG_GRID);
    show(document, ID_VIEWER);
}

/// Reflect the session phase in the status card and the reset button.
pub fn show_phase(document: &web::Document, phase: &ViewPhase) {
    match layout::status_text(phase) {
        Some(text) => {
            dom::set_text(document, ID_VIEWER_STATUS_TEXT, &text);
            show(document, ID_VIEWER_STATUS);
        }
        None => hide(document, ID_VIEWER_STATUS),
    }
    if matches!(phase, ViewPhase::Failed(_)) {
        show(document, ID_VIEWER_RETRY);
    } else {
        hide(document, ID_VIEWER_RETRY);
    }
    dom::set_disabled(document, ID_VIEWER_RESET, *phase != ViewPhase::Ready);
}
