// Host-side tests for scroll progress mapping.

use identra_core::*;

#[test]
fn fraction_clamps_outside_region() {
    let region = ScrollRegion::new(1000.0, 3000.0);
    for offset in [-500.0, 0.0, 999.9, 1000.0] {
        assert_eq!(region.fraction(offset).get(), 0.0, "offset {offset}");
    }
    for offset in [3000.0, 3000.1, 10_000.0, f32::MAX] {
        assert_eq!(region.fraction(offset).get(), 1.0, "offset {offset}");
    }
    assert!((region.fraction(2000.0).get() - 0.5).abs() < 1e-6);
}

#[test]
fn fraction_tracks_offset_monotonically() {
    let region = ScrollRegion::new(200.0, 1400.0);
    let mut prev = region.fraction(0.0).get();
    let mut offset = 0.0;
    while offset < 1600.0 {
        offset += 3.7;
        let f = region.fraction(offset).get();
        assert!(f >= prev);
        assert!((0.0..=1.0).contains(&f));
        prev = f;
    }
}

#[test]
fn zero_sized_region_reports_zero() {
    let region = ScrollRegion::new(500.0, 500.0);
    assert!(region.is_empty());
    assert_eq!(region.fraction(500.0).get(), 0.0);
    assert_eq!(region.fraction(9000.0).get(), 0.0);

    // container no taller than the viewport
    let short = ScrollRegion::from_bounds(800.0, 600.0, 900.0);
    assert!(short.is_empty());
    assert_eq!(short.fraction(1000.0).get(), 0.0);
}

#[test]
fn region_from_container_bounds() {
    // 300vh section on a 1000px viewport starting 2000px down
    let region = ScrollRegion::from_bounds(2000.0, 3000.0, 1000.0);
    assert_eq!(region.start, 2000.0);
    assert_eq!(region.end, 4000.0);
    assert_eq!(region.fraction(3000.0).get(), 0.5);
}

#[test]
fn fraction_new_clamps_and_rejects_nan() {
    assert_eq!(ScrollFraction::new(-0.2).get(), 0.0);
    assert_eq!(ScrollFraction::new(1.7).get(), 1.0);
    assert_eq!(ScrollFraction::new(f32::NAN).get(), 0.0);
}

#[test]
fn map_range_saturates_without_extrapolating() {
    assert_eq!(map_range(0.0, (0.15, 0.55), (110.0, 15.0)), 110.0);
    assert_eq!(map_range(0.9, (0.15, 0.55), (110.0, 15.0)), 15.0);
    let mid = map_range(0.35, (0.15, 0.55), (110.0, 15.0));
    assert!((mid - 62.5).abs() < 1e-4);
}

#[test]
fn map_range_handles_reversed_and_degenerate_inputs() {
    assert!((map_range(0.25, (0.5, 0.0), (0.0, 1.0)) - 0.5).abs() < 1e-6);
    assert_eq!(map_range(0.7, (0.5, 0.0), (0.0, 1.0)), 0.0);
    assert_eq!(map_range(0.4, (0.5, 0.5), (2.0, 8.0)), 2.0);
    assert_eq!(map_range(0.5, (0.5, 0.5), (2.0, 8.0)), 8.0);
}

#[test]
fn keyframes_fade_in_hold_fade_out() {
    let k = Keyframes::new(&[0.0, 0.15, 0.85, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
    assert_eq!(k.sample(-1.0), 0.0);
    assert!((k.sample(0.075) - 0.5).abs() < 1e-5);
    assert_eq!(k.sample(0.15), 1.0);
    assert_eq!(k.sample(0.5), 1.0);
    assert!((k.sample(0.925) - 0.5).abs() < 1e-5);
    assert_eq!(k.sample(2.0), 0.0);
}

#[test]
fn keyframes_reject_bad_stops() {
    assert!(matches!(
        Keyframes::new(&[0.0, 0.5], &[1.0]),
        Err(MotionError::Keyframes { inputs: 2, outputs: 1 })
    ));
    assert!(matches!(
        Keyframes::new(&[], &[]),
        Err(MotionError::Keyframes { .. })
    ));
    assert!(matches!(
        Keyframes::new(&[0.5, 0.2], &[0.0, 1.0]),
        Err(MotionError::Breakpoints(_))
    ));
}

#[test]
fn linear_keyframes_match_map_range() {
    let k = Keyframes::linear((0.3, 0.8), (1.0, 0.5));
    for i in 0..=20 {
        let f = i as f32 / 20.0;
        assert!((k.sample(f) - map_range(f, (0.3, 0.8), (1.0, 0.5))).abs() < 1e-6);
    }
}

#[test]
fn publisher_gives_every_consumer_the_same_sample() {
    let mut publisher = ScrollPublisher::new(ScrollRegion::new(0.0, 1000.0));
    let header = Track::linear(Property::Opacity, (0.0, 0.15), (1.0, 0.0));
    let card = Track::linear(Property::TranslatePercentY, (0.15, 0.55), (110.0, 15.0));

    let sample = publisher.publish(150.0);
    assert_eq!(sample, publisher.latest());
    assert_eq!(header.value(&sample), 0.0);
    assert_eq!(card.value(&sample), 110.0);

    let next = publisher.publish(350.0);
    assert_eq!(next.id, sample.id + 1);
    assert!((card.value(&next) - 62.5).abs() < 1e-3);
}

#[test]
fn publisher_region_update_applies_on_next_publish() {
    let mut publisher = ScrollPublisher::new(ScrollRegion::new(0.0, 1000.0));
    assert_eq!(publisher.publish(500.0).fraction.get(), 0.5);
    publisher.set_region(ScrollRegion::new(0.0, 2000.0));
    assert_eq!(publisher.latest().fraction.get(), 0.5);
    assert_eq!(publisher.publish(500.0).fraction.get(), 0.25);
}

#[test]
fn eased_keyframes_keep_their_endpoints() {
    let k = Keyframes::linear((0.0, 800.0), (0.0, -800.0)).with_easing(Easing::PowerIn(1));
    assert_eq!(k.sample(0.0), 0.0);
    assert_eq!(k.sample(800.0), -800.0);
    assert!((k.sample(200.0) + 50.0).abs() < 1e-3);
}

#[test]
fn pixel_tracks_read_the_distance_scrolled_into_the_region() {
    let mut publisher = ScrollPublisher::new(ScrollRegion::new(1000.0, 4000.0));
    let header = Track::over_pixels(Property::Opacity, (0.0, 800.0), (1.0, 0.0), Easing::Linear);

    let before = publisher.publish(900.0);
    assert_eq!(before.scrolled, -100.0);
    assert_eq!(header.value(&before), 1.0);

    let inside = publisher.publish(1400.0);
    assert_eq!(inside.scrolled, 400.0);
    assert!((header.value(&inside) - 0.5).abs() < 1e-6);
    assert_eq!(header.input, TrackInput::Pixels);
}
