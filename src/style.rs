// Turns evaluated track values into inline CSS for one element.

use identra_core::Property;

/// Accumulated visual state of one element for one scroll sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    pub opacity: Option<f32>,
    pub translate_x_px: f32,
    pub translate_y_px: f32,
    pub translate_y_percent: f32,
    pub scale: Option<f32>,
    pub blur_px: Option<f32>,
    pub brightness: Option<f32>,
    pub height_percent: Option<f32>,
    pub background_lightness: Option<f32>,
}

impl ElementStyle {
    /// Fold one property in. `overflow_px` resolves [`Property::OverflowX`].
    pub fn apply(&mut self, property: Property, value: f32, overflow_px: f32) {
        match property {
            Property::Opacity => self.opacity = Some(value.clamp(0.0, 1.0)),
            Property::TranslateX => self.translate_x_px += value,
            Property::TranslateY => self.translate_y_px += value,
            Property::TranslatePercentY => self.translate_y_percent += value,
            Property::Scale => self.scale = Some(value),
            Property::Blur => self.blur_px = Some(value.max(0.0)),
            Property::Brightness => self.brightness = Some(value),
            Property::HeightPercent => self.height_percent = Some(value.clamp(0.0, 100.0)),
            Property::OverflowX => self.translate_x_px += value * overflow_px.max(0.0),
            Property::BackgroundLightness => {
                self.background_lightness = Some(value.clamp(0.0, 1.0))
            }
        }
    }

    /// CSS `transform`, or `None` when nothing moves.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.translate_x_px != 0.0 || self.translate_y_px != 0.0 {
            parts.push(format!(
                "translate({:.2}px, {:.2}px)",
                self.translate_x_px, self.translate_y_px
            ));
        }
        if self.translate_y_percent != 0.0 {
            parts.push(format!("translateY({:.2}%)", self.translate_y_percent));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({:.4})", s));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// CSS `filter`, or `None` when unfiltered.
    pub fn filter(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(b) = self.blur_px {
            parts.push(format!("blur({:.2}px)", b));
        }
        if let Some(b) = self.brightness {
            parts.push(format!("brightness({:.3})", b));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// `(property, value)` pairs to set, in a stable order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(o) = self.opacity {
            out.push(("opacity", format!("{:.3}", o)));
        }
        if let Some(t) = self.transform() {
            out.push(("transform", t));
        }
        if let Some(f) = self.filter() {
            out.push(("filter", f));
        }
        if let Some(h) = self.height_percent {
            out.push(("height", format!("{:.2}%", h)));
        }
        if let Some(l) = self.background_lightness {
            out.push(("background-color", format!("hsl(0, 0%, {:.2}%)", l * 100.0)));
        }
        out
    }
}

/// Opacity and pointer-events for a stage subtree during a cross-fade.
pub fn stage_declarations(visibility: f32, mounted: bool) -> Vec<(&'static str, String)> {
    let v = visibility.clamp(0.0, 1.0);
    vec![
        ("opacity", format!("{:.3}", v)),
        (
            "visibility",
            if mounted { "visible" } else { "hidden" }.to_string(),
        ),
        (
            "pointer-events",
            if mounted && v >= 1.0 { "auto" } else { "none" }.to_string(),
        ),
    ]
}

/// Entrance reveal at eased progress `t`: fade in while rising into place.
pub fn reveal_style(t: f32, offset_px: f32) -> ElementStyle {
    let t = t.clamp(0.0, 1.0);
    ElementStyle {
        opacity: Some(t),
        translate_y_px: (1.0 - t) * offset_px,
        ..Default::default()
    }
}

/// Offset applied to a magnetic element.
pub fn magnet_declarations(offset_x: f32, offset_y: f32) -> Vec<(&'static str, String)> {
    vec![(
        "transform",
        format!("translate({:.2}px, {:.2}px)", offset_x, offset_y),
    )]
}
