//! Declarative scroll choreography for the landing page sections.
//!
//! Each preset lists the tracks bound to named targets inside one section,
//! plus an optional stage list. The web layer looks targets up by
//! `data-motion-target` and applies the evaluated values as inline styles.

use crate::constants::CROSSFADE_SECS;
use crate::easing::Easing;
use crate::error::MotionResult;
use crate::scroll::{Keyframes, Property, ScrollSample, Track};
use crate::stage::{Choreographer, StagePolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub target: String,
    pub track: Track,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StagePreset {
    pub names: &'static [&'static str],
    pub policy: StagePolicy,
}

impl StagePreset {
    pub fn choreographer(&self) -> MotionResult<Choreographer> {
        Choreographer::new(self.names, self.policy.clone(), CROSSFADE_SECS)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPreset {
    pub id: &'static str,
    pub bindings: Vec<Binding>,
    pub stages: Option<StagePreset>,
}

/// One evaluated property for one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackValue<'a> {
    pub target: &'a str,
    pub property: Property,
    pub value: f32,
}

impl SectionPreset {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            bindings: Vec::new(),
            stages: None,
        }
    }

    fn bind(mut self, target: impl Into<String>, track: Track) -> Self {
        self.bindings.push(Binding {
            target: target.into(),
            track,
        });
        self
    }

    fn linear(
        self,
        target: impl Into<String>,
        property: Property,
        input: (f32, f32),
        output: (f32, f32),
    ) -> Self {
        self.bind(target, Track::linear(property, input, output))
    }

    /// Every bound value for one sample.
    pub fn evaluate<'a>(
        &'a self,
        sample: &'a ScrollSample,
    ) -> impl Iterator<Item = TrackValue<'a>> + 'a {
        self.bindings.iter().map(move |b| TrackValue {
            target: &b.target,
            property: b.track.property,
            value: b.track.value(sample),
        })
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.bindings.iter().filter_map(move |b| {
            if seen.contains(&b.target.as_str()) {
                None
            } else {
                seen.push(&b.target);
                Some(b.target.as_str())
            }
        })
    }
}

/// Layered security cards: the header lifts away, then two cards slide
/// up over the first one, which recedes and blurs.
pub fn security_trust() -> SectionPreset {
    SectionPreset::new("security")
        .linear("header", Property::Opacity, (0.0, 0.15), (1.0, 0.0))
        .linear("header", Property::TranslateY, (0.0, 0.15), (0.0, -40.0))
        .linear("card-1", Property::Scale, (0.0, 1.0), (1.0, 0.95))
        .linear("card-1", Property::Opacity, (0.3, 0.8), (1.0, 0.5))
        .linear("card-1", Property::Blur, (0.3, 0.8), (0.0, 4.0))
        .linear("card-2", Property::TranslatePercentY, (0.15, 0.55), (110.0, 15.0))
        .linear("card-2", Property::Scale, (0.55, 1.0), (1.0, 0.98))
        .linear("card-3", Property::TranslatePercentY, (0.55, 0.9), (110.0, 30.0))
}

/// Comparison table rows revealed one after another.
pub fn differentiation(rows: usize) -> SectionPreset {
    let mut preset = SectionPreset::new("differentiation")
        .linear("header", Property::Opacity, (0.0, 0.1), (1.0, 0.5))
        .linear("divider", Property::HeightPercent, (0.1, 0.8), (0.0, 100.0));
    for i in 0..rows {
        let (start, end) = row_window(i);
        let target = format!("row-{i}");
        preset = preset
            .linear(target.clone(), Property::Opacity, (start, end), (0.0, 1.0))
            .linear(target.clone(), Property::TranslateY, (start, end), (20.0, 0.0))
            .linear(target.clone(), Property::Blur, (start, end), (8.0, 0.0))
            .linear(target, Property::Brightness, (start, end), (1.5, 1.0));
    }
    preset
}

/// Reveal window of comparison row `index`.
#[inline]
pub fn row_window(index: usize) -> (f32, f32) {
    let start = 0.15 + index as f32 * 0.25;
    (start, start + 0.15)
}

/// Problem statements shown one at a time, then the whole block diffuses.
pub fn problem_insight(statements: usize) -> SectionPreset {
    let mut preset = SectionPreset::new("problem").linear(
        "background",
        Property::BackgroundLightness,
        (0.0, 1.0),
        (0.0, 0.02),
    );
    for i in 0..statements {
        preset = preset.bind(
            format!("statement-{i}"),
            Track::new(Property::Opacity, statement_keyframes(i, statements)),
        );
    }
    preset
        .linear("content", Property::Blur, (0.9, 1.0), (0.0, 20.0))
        .linear("content", Property::Opacity, (0.9, 1.0), (1.0, 0.0))
        .linear("content", Property::Scale, (0.9, 1.0), (1.0, 0.9))
        .linear("content", Property::TranslateY, (0.9, 1.0), (0.0, -50.0))
}

/// Fade in, hold, fade out across statement `index`'s equal share of the
/// section. The last statement fades out faster. Fades are capped at half
/// the share so short shares peak at their midpoint instead of overlapping.
pub fn statement_keyframes(index: usize, total: usize) -> Keyframes {
    let total = total.max(1);
    let width = 1.0 / total as f32;
    let start = index as f32 * width;
    let end = start + width;
    let fade_out: f32 = if index + 1 == total { 0.05 } else { 0.15 };
    let fade_in = 0.15_f32.min(width / 2.0);
    let fade_out = fade_out.min(width / 2.0);
    let hold_start = start + fade_in;
    let hold_end = (end - fade_out).max(hold_start);
    Keyframes::sorted(&[start, hold_start, hold_end, end], &[0.0, 1.0, 1.0, 0.0])
}

pub const PRODUCT_MODES: &[&str] = &["invoke", "ghost", "console", "recall"];

/// Product walkthrough: invoke bar, ghost palette, console window, recall panel.
pub fn product_experience() -> SectionPreset {
    let mut preset = SectionPreset::new("product")
        .linear("window", Property::Scale, (0.25, 0.4), (0.95, 1.0))
        .linear("window", Property::Opacity, (0.25, 0.35), (0.0, 1.0))
        .linear("recall-panel", Property::TranslateX, (0.75, 0.85), (10.0, 0.0))
        .linear("recall-panel", Property::Opacity, (0.75, 0.85), (0.0, 1.0));
    preset.stages = Some(StagePreset {
        names: PRODUCT_MODES,
        policy: StagePolicy::thresholds(&[0.15, 0.3, 0.75]),
    });
    preset
}

pub const HEADER_EXIT_PX: f32 = 800.0;

pub const WALKTHROUGH_STEPS: &[&str] = &["capture", "memory", "reasoning"];

/// Horizontal three-step walkthrough pinned while the rail slides left. The
/// header leaves faster, over the first `HEADER_EXIT_PX` of scroll.
pub fn how_it_works() -> SectionPreset {
    let exit = (0.0, HEADER_EXIT_PX);
    let mut preset = SectionPreset::new("how-it-works")
        .linear("rail", Property::OverflowX, (0.0, 1.0), (0.0, -1.0))
        .bind(
            "header",
            Track::over_pixels(Property::TranslateX, exit, (0.0, -HEADER_EXIT_PX), Easing::PowerIn(1)),
        )
        .bind(
            "header",
            Track::over_pixels(Property::Opacity, exit, (1.0, 0.0), Easing::PowerIn(1)),
        );
    preset.stages = Some(StagePreset {
        names: WALKTHROUGH_STEPS,
        policy: StagePolicy::Round,
    });
    preset
}

/// All scroll-driven sections in page order.
pub fn page_presets() -> Vec<SectionPreset> {
    vec![
        problem_insight(4),
        how_it_works(),
        product_experience(),
        security_trust(),
        differentiation(4),
    ]
}
