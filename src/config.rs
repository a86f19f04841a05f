// Field configuration overrides read from `data-*` attributes on the canvas.

use crate::constants::{CONNECTION_DISTANCE_ATTR, EDGE_ATTR, MAX_NODE_COUNT, NODE_COUNT_ATTR};
use identra_core::{EdgeMode, FieldConfig};

/// Apply attribute overrides on top of the defaults.
///
/// `attr` looks up a raw attribute value. Unparseable values are ignored with
/// a warning so a typo in markup never disables the background.
pub fn field_config_from_attrs(attr: impl Fn(&str) -> Option<String>) -> FieldConfig {
    let mut cfg = FieldConfig::default();
    if let Some(raw) = attr(NODE_COUNT_ATTR) {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => cfg.count = n.min(MAX_NODE_COUNT),
            _ => log::warn!("[config] ignoring {}={:?}", NODE_COUNT_ATTR, raw),
        }
    }
    if let Some(raw) = attr(CONNECTION_DISTANCE_ATTR) {
        match raw.trim().parse::<f32>() {
            Ok(d) if d.is_finite() && d > 0.0 => cfg.connection_distance = d,
            _ => log::warn!("[config] ignoring {}={:?}", CONNECTION_DISTANCE_ATTR, raw),
        }
    }
    if let Some(raw) = attr(EDGE_ATTR) {
        match parse_edge(&raw) {
            Some(edge) => cfg.edge = edge,
            None => log::warn!("[config] ignoring {}={:?}", EDGE_ATTR, raw),
        }
    }
    cfg
}

#[inline]
pub fn parse_edge(raw: &str) -> Option<EdgeMode> {
    match raw.trim() {
        "wrap" | "Wrap" => Some(EdgeMode::Wrap),
        "bounce" | "Bounce" => Some(EdgeMode::Bounce),
        _ => None,
    }
}
