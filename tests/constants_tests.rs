// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use identra_core::constants as core_constants;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!(MAX_NODE_COUNT >= core_constants::NODE_COUNT);
    assert!(REVEAL_SECS > 0.0);
    assert!(REVEAL_LINE > 0.0 && REVEAL_LINE <= 1.0);
    assert!(MAGNET_REST_EPSILON > 0.0);
}

#[test]
fn dom_contract_names_are_distinct() {
    let attrs = [
        SECTION_ATTR,
        TARGET_ATTR,
        STAGE_ATTR,
        ACTIVE_STAGE_ATTR,
        MAGNETIC_STRENGTH_ATTR,
        NODE_COUNT_ATTR,
        CONNECTION_DISTANCE_ATTR,
        EDGE_ATTR,
        REVEAL_ATTR,
    ];
    for (i, a) in attrs.iter().enumerate() {
        assert!(a.starts_with("data-"), "{a}");
        for b in &attrs[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(FIELD_CANVAS_ID, WAVES_CANVAS_ID);
    assert_eq!(MAGNETIC_SELECTOR, format!("[{}]", MAGNETIC_STRENGTH_ATTR));
}
