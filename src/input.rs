use glam::Vec2;

/// Latest pointer reading shared between event handlers and the frame tick.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Viewport (client) coordinates; `None` until the first move and after leave.
    pub client: Option<Vec2>,
}

/// Map a client-space point into a canvas's backing-store pixels.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect in CSS px and
/// `backing` is its `width`/`height`. A zero-sized rect maps to `None`.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_origin) / rect_size * backing)
}

/// Offset of the pointer from an element's centre, for magnetic pulls.
#[inline]
pub fn offset_from_centre(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    client - (rect_origin + rect_size * 0.5)
}

/// Parse a magnetic strength attribute; empty means the default.
#[inline]
pub fn parse_strength(raw: &str, default: f32) -> f32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    raw.parse::<f32>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .unwrap_or(default)
}

/// Whether an element whose top edge sits at `top` (viewport px) has
/// crossed the reveal line, `line` of the way down the viewport.
#[inline]
pub fn past_reveal_line(top: f32, viewport_height: f32, line: f32) -> bool {
    top <= viewport_height * line
}

/// Remembers the document height so layout shifts after start (late fonts,
/// images) trigger a re-measure.
#[derive(Default, Clone, Copy, Debug)]
pub struct HeightWatch {
    last: Option<f32>,
}

impl HeightWatch {
    /// Record `height`; true when it differs from the previous reading.
    /// The first reading is the baseline and never counts as a change.
    pub fn changed(&mut self, height: f32) -> bool {
        let changed = self.last.is_some_and(|h| (h - height).abs() >= 0.5);
        self.last = Some(height);
        changed
    }
}
