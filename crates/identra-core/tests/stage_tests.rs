// Host-side tests for stage selection and cross-fades.

use identra_core::*;

fn policies() -> Vec<(StagePolicy, usize)> {
    vec![
        (StagePolicy::Floor, 4),
        (StagePolicy::Floor, 1),
        (StagePolicy::Round, 3),
        (StagePolicy::Round, 7),
        (StagePolicy::thresholds(&[0.15, 0.3, 0.75]), 4),
    ]
}

#[test]
fn boundaries_select_first_and_last_stage() {
    for (policy, n) in policies() {
        assert_eq!(policy.select(ScrollFraction::START, n), 0, "{policy:?}");
        assert_eq!(policy.select(ScrollFraction::END, n), n - 1, "{policy:?}");
    }
}

#[test]
fn small_monotonic_steps_visit_every_stage_in_order() {
    for (policy, n) in policies() {
        let mut visited = vec![policy.select(ScrollFraction::START, n)];
        for i in 1..=1000 {
            let stage = policy.select(ScrollFraction::new(i as f32 / 1000.0), n);
            let last = *visited.last().unwrap();
            assert!(stage == last || stage == last + 1, "{policy:?} jumped {last} -> {stage}");
            if stage != last {
                visited.push(stage);
            }
        }
        assert_eq!(visited, (0..n).collect::<Vec<_>>(), "{policy:?}");
    }
}

#[test]
fn thresholds_match_product_modes() {
    let policy = StagePolicy::thresholds(&[0.15, 0.3, 0.75]);
    let pick = |f: f32| policy.select(ScrollFraction::new(f), 4);
    assert_eq!(pick(0.1), 0);
    assert_eq!(pick(0.15), 1);
    assert_eq!(pick(0.29), 1);
    assert_eq!(pick(0.3), 2);
    assert_eq!(pick(0.74), 2);
    assert_eq!(pick(0.75), 3);
}

#[test]
fn round_policy_centres_steps() {
    let policy = StagePolicy::Round;
    let pick = |f: f32| policy.select(ScrollFraction::new(f), 3);
    assert_eq!(pick(0.24), 0);
    assert_eq!(pick(0.26), 1);
    assert_eq!(pick(0.74), 1);
    assert_eq!(pick(0.76), 2);
}

#[test]
fn choreographer_rejects_bad_setup() {
    assert!(matches!(
        Choreographer::new(&[], StagePolicy::Floor, 0.5),
        Err(MotionError::NoStages)
    ));
    assert!(matches!(
        Choreographer::new(&["a", "b"], StagePolicy::thresholds(&[0.2, 0.4]), 0.5),
        Err(MotionError::BreakpointCount { breakpoints: 2, stages: 2 })
    ));
    assert!(matches!(
        Choreographer::new(&["a", "b", "c"], StagePolicy::thresholds(&[0.6, 0.4]), 0.5),
        Err(MotionError::Breakpoints(_))
    ));
    assert!(matches!(
        Choreographer::new(&["a", "b"], StagePolicy::thresholds(&[1.0]), 0.5),
        Err(MotionError::Breakpoints(_))
    ));
}

#[test]
fn update_reports_only_real_changes() {
    let mut ch = Choreographer::new(&["a", "b", "c", "d"], StagePolicy::Floor, 0.4).unwrap();
    assert_eq!(ch.active(), 0);
    assert_eq!(ch.update(ScrollFraction::new(0.1)), None);
    assert_eq!(
        ch.update(ScrollFraction::new(0.3)),
        Some(StageChange { from: 0, to: 1 })
    );
    assert_eq!(ch.update(ScrollFraction::new(0.4)), None);
    assert_eq!(ch.active_name(), "b");
}

#[test]
fn crossfade_keeps_outgoing_stage_mounted_until_done() {
    let mut ch = Choreographer::new(&["a", "b", "c"], StagePolicy::Floor, 0.5).unwrap();
    assert_eq!(ch.visibility(0), 1.0);
    assert!(!ch.is_fading());

    ch.update(ScrollFraction::new(0.5));
    assert!(ch.is_mounted(0));
    assert!(ch.is_mounted(1));
    assert!(!ch.is_mounted(2));
    assert_eq!(ch.visibility(1), 0.0);
    assert_eq!(ch.visibility(0), 1.0);

    ch.advance(0.25);
    let incoming = ch.visibility(1);
    let outgoing = ch.visibility(0);
    assert!(incoming > 0.0 && incoming < 1.0);
    assert!((incoming + outgoing - 1.0).abs() < 1e-6);

    ch.advance(0.3);
    assert!(!ch.is_fading());
    assert!(!ch.is_mounted(0));
    assert_eq!(ch.visibility(1), 1.0);
    assert_eq!(ch.visibility(0), 0.0);
}

#[test]
fn zero_length_crossfade_switches_immediately() {
    let mut ch = Choreographer::new(&["a", "b"], StagePolicy::Round, 0.0).unwrap();
    ch.update(ScrollFraction::END);
    assert_eq!(ch.visibility(1), 1.0);
    assert_eq!(ch.visibility(0), 0.0);
    ch.advance(0.0);
    assert!(!ch.is_mounted(0));
}

#[test]
fn switch_during_a_fade_continues_from_current_visibility() {
    let mut ch = Choreographer::new(&["a", "b", "c"], StagePolicy::Floor, 0.5).unwrap();
    ch.update(ScrollFraction::new(0.4));
    ch.advance(0.1);
    let a = ch.visibility(0);
    let b = ch.visibility(1);
    assert!(a > 0.0 && a < 1.0);
    assert!(b > 0.0 && b < 1.0);

    assert_eq!(
        ch.update(ScrollFraction::new(0.7)),
        Some(StageChange { from: 1, to: 2 })
    );
    // nothing jumps at the moment of the second switch
    assert!((ch.visibility(0) - a).abs() < 1e-6);
    assert!((ch.visibility(1) - b).abs() < 1e-6);
    assert_eq!(ch.visibility(2), 0.0);
    assert!(ch.is_mounted(0));
    assert!(ch.is_mounted(1));
    assert!(ch.is_mounted(2));

    ch.advance(0.05);
    assert!(ch.visibility(0) < a);
    assert!(ch.visibility(1) < b);
    assert!(ch.visibility(2) > 0.0);

    ch.advance(1.0);
    assert!(!ch.is_fading());
    assert_eq!(ch.visibility(2), 1.0);
    assert_eq!(ch.visibility(0), 0.0);
    assert_eq!(ch.visibility(1), 0.0);
    assert!(!ch.is_mounted(0));
    assert!(!ch.is_mounted(1));
}
