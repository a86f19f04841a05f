// Host-side tests for turning track values into inline CSS.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use identra_core::Property;
use style::*;

fn value_of<'a>(decls: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    decls
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn untouched_style_declares_nothing() {
    let s = ElementStyle::default();
    assert!(s.transform().is_none());
    assert!(s.filter().is_none());
    assert!(s.declarations().is_empty());
}

#[test]
fn translations_accumulate_into_one_transform() {
    let mut s = ElementStyle::default();
    s.apply(Property::TranslateY, -40.0, 0.0);
    s.apply(Property::TranslateX, 10.0, 0.0);
    s.apply(Property::Scale, 0.95, 0.0);
    assert_eq!(
        s.transform().as_deref(),
        Some("translate(10.00px, -40.00px) scale(0.9500)")
    );
}

#[test]
fn overflow_track_scales_by_measured_overflow() {
    let mut s = ElementStyle::default();
    s.apply(Property::OverflowX, -0.5, 1200.0);
    assert_eq!(s.translate_x_px, -600.0);
    // nothing to scroll, nothing moves
    let mut t = ElementStyle::default();
    t.apply(Property::OverflowX, -1.0, -30.0);
    assert_eq!(t.translate_x_px, 0.0);
}

#[test]
fn values_are_clamped_to_css_ranges() {
    let mut s = ElementStyle::default();
    s.apply(Property::Opacity, 1.4, 0.0);
    s.apply(Property::Blur, -2.0, 0.0);
    s.apply(Property::HeightPercent, 140.0, 0.0);
    let decls = s.declarations();
    assert_eq!(value_of(&decls, "opacity"), Some("1.000"));
    assert_eq!(value_of(&decls, "filter"), Some("blur(0.00px)"));
    assert_eq!(value_of(&decls, "height"), Some("100.00%"));
}

#[test]
fn filter_combines_blur_and_brightness() {
    let mut s = ElementStyle::default();
    s.apply(Property::Blur, 8.0, 0.0);
    s.apply(Property::Brightness, 1.5, 0.0);
    assert_eq!(s.filter().as_deref(), Some("blur(8.00px) brightness(1.500)"));
}

#[test]
fn percent_translation_is_separate_from_pixels() {
    let mut s = ElementStyle::default();
    s.apply(Property::TranslatePercentY, 110.0, 0.0);
    assert_eq!(s.transform().as_deref(), Some("translateY(110.00%)"));
}

#[test]
fn stage_subtree_is_inert_until_fully_visible() {
    let fading = stage_declarations(0.4, true);
    assert_eq!(value_of(&fading, "opacity"), Some("0.400"));
    assert_eq!(value_of(&fading, "visibility"), Some("visible"));
    assert_eq!(value_of(&fading, "pointer-events"), Some("none"));

    let shown = stage_declarations(1.0, true);
    assert_eq!(value_of(&shown, "pointer-events"), Some("auto"));

    let unmounted = stage_declarations(0.0, false);
    assert_eq!(value_of(&unmounted, "visibility"), Some("hidden"));
}

#[test]
fn reveal_rises_into_place() {
    let start = reveal_style(0.0, 24.0);
    assert_eq!(start.opacity, Some(0.0));
    assert_eq!(start.translate_y_px, 24.0);

    let done = reveal_style(1.0, 24.0);
    assert_eq!(done.opacity, Some(1.0));
    assert_eq!(done.translate_y_px, 0.0);
    assert!(done.transform().is_none());
}

#[test]
fn magnet_offset_is_a_pixel_translate() {
    let decls = magnet_declarations(3.0, -1.5);
    assert_eq!(value_of(&decls, "transform"), Some("translate(3.00px, -1.50px)"));
}

#[test]
fn background_lightness_becomes_a_grey() {
    let mut s = ElementStyle::default();
    s.apply(Property::BackgroundLightness, 0.02, 0.0);
    let decls = s.declarations();
    assert_eq!(value_of(&decls, "background-color"), Some("hsl(0, 0%, 2.00%)"));
}
