//! Entrance animation for `[data-reveal]` elements. Plays when the element's
//! top crosses the reveal line and plays back when it is scrolled back above it.

use crate::constants::{REVEAL_ATTR, REVEAL_LINE, REVEAL_OFFSET_PX, REVEAL_SECS};
use crate::dom;
use crate::input::past_reveal_line;
use crate::style::reveal_style;
use identra_core::{Easing, Tween};
use web_sys as web;

pub struct Reveal {
    el: web::Element,
    tween: Tween,
    /// Whether the element is currently past the reveal line.
    shown: bool,
    /// False until the first crossing; the tween holds at 0 until then.
    playing: bool,
}

pub fn mount_reveals(document: &web::Document) -> Vec<Reveal> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all(&root, &format!("[{}]", REVEAL_ATTR))
        .into_iter()
        .map(|el| {
            let delay = el
                .get_attribute(REVEAL_ATTR)
                .and_then(|raw| raw.trim().parse::<f32>().ok())
                .filter(|d| d.is_finite() && *d >= 0.0)
                .unwrap_or(0.0);
            let reveal = Reveal {
                el,
                tween: Tween::new(0.0, 1.0, REVEAL_SECS, Easing::PowerInOut(4)).with_delay(delay),
                shown: false,
                playing: false,
            };
            reveal.apply();
            reveal
        })
        .collect()
}

impl Reveal {
    pub fn update(&mut self, viewport_height: f32, dt_sec: f32) {
        let (origin, _) = dom::rect_origin_size(&self.el);
        let past = past_reveal_line(origin.y, viewport_height, REVEAL_LINE);
        if past != self.shown {
            self.shown = past;
            if self.playing {
                self.tween.reverse();
            } else {
                self.playing = true;
            }
        }
        if !self.playing || self.tween.is_finished() {
            return;
        }
        self.tween.advance(dt_sec);
        self.apply();
    }

    fn apply(&self) {
        let style = reveal_style(self.tween.value(), REVEAL_OFFSET_PX);
        dom::set_styles(&self.el, &style.declarations());
    }
}
