// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_maps_into_backing_pixels() {
    // canvas at (100, 50), 400x200 CSS px, backing store twice as dense
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 200.0);
    let backing = Vec2::new(800.0, 400.0);

    let p = client_to_canvas_px(Vec2::new(300.0, 150.0), origin, size, backing).unwrap();
    assert_eq!(p, Vec2::new(400.0, 200.0));

    let corner = client_to_canvas_px(origin, origin, size, backing).unwrap();
    assert_eq!(corner, Vec2::ZERO);
}

#[test]
fn pointer_outside_canvas_maps_outside_bounds() {
    let p = client_to_canvas_px(
        Vec2::new(-20.0, 10.0),
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 100.0),
    )
    .unwrap();
    assert!(p.x < 0.0);
}

#[test]
fn zero_sized_canvas_has_no_pointer() {
    let r = client_to_canvas_px(Vec2::ONE, Vec2::ZERO, Vec2::new(0.0, 100.0), Vec2::ONE);
    assert!(r.is_none());
}

#[test]
fn offset_is_measured_from_the_centre() {
    let origin = Vec2::new(10.0, 10.0);
    let size = Vec2::new(100.0, 40.0);
    assert_eq!(offset_from_centre(Vec2::new(60.0, 30.0), origin, size), Vec2::ZERO);
    assert_eq!(
        offset_from_centre(Vec2::new(110.0, 10.0), origin, size),
        Vec2::new(50.0, -20.0)
    );
}

#[test]
fn strength_attribute_parsing() {
    assert_eq!(parse_strength("", 0.5), 0.5);
    assert_eq!(parse_strength("  ", 0.5), 0.5);
    assert_eq!(parse_strength("0.3", 0.5), 0.3);
    assert_eq!(parse_strength("-1", 0.5), 0.5);
    assert_eq!(parse_strength("NaN", 0.5), 0.5);
    assert_eq!(parse_strength("strong", 0.5), 0.5);
}

#[test]
fn pointer_state_starts_empty() {
    assert!(PointerState::default().client.is_none());
}

#[test]
fn reveal_line_sits_at_eighty_percent() {
    let vh = 1000.0;
    assert!(!past_reveal_line(900.0, vh, 0.8));
    assert!(past_reveal_line(800.0, vh, 0.8));
    assert!(past_reveal_line(-300.0, vh, 0.8));
    // scrolling back up moves the top below the line again
    assert!(!past_reveal_line(801.0, vh, 0.8));
}

#[test]
fn height_watch_flags_layout_shifts_after_the_baseline() {
    let mut watch = HeightWatch::default();
    assert!(!watch.changed(3000.0));
    assert!(!watch.changed(3000.0));
    assert!(!watch.changed(3000.2));
    assert!(watch.changed(3400.0));
    assert!(!watch.changed(3400.0));
}
