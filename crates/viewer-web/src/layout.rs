use crate::constants::{BRAND, LOADING_TEXT, MAX_BACKING_PX};
use viewer_core::ViewPhase;

/// Backing store size for a canvas laid out at `css_w` x `css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, pixel_ratio: f32) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio as f64
    } else {
        1.0
    };
    let side = |css: f64| {
        let px = if css.is_finite() { css * ratio } else { 0.0 };
        (px.round() as u32).clamp(1, MAX_BACKING_PX)
    };
    (side(css_w), side(css_h))
}

/// Text for the viewer status card, `None` once the model is on screen.
pub fn status_text(phase: &ViewPhase) -> Option<String> {
    match phase {
        ViewPhase::Loading => Some(LOADING_TEXT.to_string()),
        ViewPhase::Ready => None,
        ViewPhase::Failed(err) => Some(format!("Could not load this model: {}", err)),
    }
}

#[inline]
pub fn footer_text(year: u32) -> String {
    format!("\u{a9} {} {}", year, BRAND)
}
