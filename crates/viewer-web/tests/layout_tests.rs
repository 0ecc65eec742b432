// Host-side tests for canvas sizing and viewer text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use constants::*;
use layout::*;
use viewer_core::{AssetError, QualityLevel, ViewPhase};

#[test]
fn backing_size_scales_css_box_by_quality() {
    let standard = QualityLevel::Standard.pixel_ratio();
    let high = QualityLevel::High.pixel_ratio();
    assert_eq!(backing_size(800.0, 600.0, standard), (1200, 900));
    assert_eq!(backing_size(800.0, 600.0, high), (1600, 1200));
}

#[test]
fn backing_size_is_clamped() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-50.0, f64::NAN, 2.0), (1, 1));
    assert_eq!(
        backing_size(10_000.0, 300.0, 2.0),
        (MAX_BACKING_PX, 600)
    );
}

#[test]
fn invalid_pixel_ratio_falls_back_to_css_size() {
    assert_eq!(backing_size(320.0, 240.0, 0.0), (320, 240));
    assert_eq!(backing_size(320.0, 240.0, f32::NAN), (320, 240));
}

#[test]
fn status_text_follows_phase() {
    assert_eq!(status_text(&ViewPhase::Loading).as_deref(), Some(LOADING_TEXT));
    assert_eq!(status_text(&ViewPhase::Ready), None);

    let failed = ViewPhase::Failed(AssetError::Fetch {
        locator: "/models/headphone.glb".into(),
        reason: "HTTP 404".into(),
    });
    let text = status_text(&failed).expect("error card text");
    assert!(text.contains("/models/headphone.glb"));
    assert!(text.contains("HTTP 404"));
}

#[test]
fn footer_carries_year_and_brand() {
    assert_eq!(footer_text(2026), "\u{a9} 2026 Creatix AR");
}
