//! Scroll progress mapping.
//!
//! A [`ScrollPublisher`] turns a physical scroll offset into one
//! [`ScrollSample`] per event. Every visual consumer derives its values from
//! that sample through pure functions ([`map_range`], [`Keyframes`],
//! [`Track`]), so two consumers can never disagree about the same event.

use crate::easing::Easing;
use crate::error::{MotionError, MotionResult};
use smallvec::SmallVec;

/// Normalized progress through a scroll region, always in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollFraction(f32);

impl ScrollFraction {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamps into [0, 1]; NaN maps to 0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// A bounded scroll region in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub start: f32,
    pub end: f32,
}

impl ScrollRegion {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Region for a tall container whose progress runs from its top meeting
    /// the viewport top to its bottom meeting the viewport bottom.
    pub fn from_bounds(top: f32, height: f32, viewport_height: f32) -> Self {
        Self {
            start: top,
            end: top + height - viewport_height,
        }
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        !(self.len() > 0.0)
    }

    /// Offsets before the region saturate at 0, after it at 1.
    /// A zero-length region always reports 0.
    pub fn fraction(&self, offset: f32) -> ScrollFraction {
        if self.is_empty() {
            return ScrollFraction::START;
        }
        ScrollFraction::new((offset - self.start) / self.len())
    }
}

/// Clamped linear remap of `value` from `input` onto `output`.
///
/// Values outside `input` saturate at the output endpoints. A reversed input
/// range is accepted; a degenerate one acts as a step at that point.
#[inline]
pub fn map_range(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    let span = i1 - i0;
    if span == 0.0 {
        return if value < i0 { o0 } else { o1 };
    }
    let t = ((value - i0) / span).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

/// Piecewise mapping over ascending input stops, clamped at both ends.
/// Each segment is linear unless an easing is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    inputs: SmallVec<[f32; 4]>,
    outputs: SmallVec<[f32; 4]>,
    easing: Easing,
}

impl Keyframes {
    pub fn new(inputs: &[f32], outputs: &[f32]) -> MotionResult<Self> {
        if inputs.is_empty() || inputs.len() != outputs.len() {
            return Err(MotionError::Keyframes {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.windows(2).any(|w| !(w[0] <= w[1])) {
            return Err(MotionError::Breakpoints(inputs.to_vec()));
        }
        Ok(Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            easing: Easing::Linear,
        })
    }

    /// Caller guarantees ascending inputs of the same length as outputs.
    pub(crate) fn sorted(inputs: &[f32], outputs: &[f32]) -> Self {
        debug_assert!(inputs.windows(2).all(|w| w[0] <= w[1]));
        debug_assert_eq!(inputs.len(), outputs.len());
        Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            easing: Easing::Linear,
        }
    }

    /// Two-stop shorthand; the input is reordered ascending if needed.
    pub fn linear(input: (f32, f32), output: (f32, f32)) -> Self {
        let (inputs, outputs) = if input.0 <= input.1 {
            ([input.0, input.1], [output.0, output.1])
        } else {
            ([input.1, input.0], [output.1, output.0])
        };
        Self {
            inputs: SmallVec::from_slice(&inputs),
            outputs: SmallVec::from_slice(&outputs),
            easing: Easing::Linear,
        }
    }

    /// Ease every segment, in ascending input order.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn sample(&self, value: f32) -> f32 {
        let last = self.inputs.len() - 1;
        if value <= self.inputs[0] {
            return self.outputs[0];
        }
        if value >= self.inputs[last] {
            return self.outputs[last];
        }
        // first stop strictly above value; exists because value < inputs[last]
        let hi = self.inputs.partition_point(|&x| x <= value);
        let (i0, i1) = (self.inputs[hi - 1], self.inputs[hi]);
        let (o0, o1) = (self.outputs[hi - 1], self.outputs[hi]);
        // i0 <= value < i1, so the span is positive
        let t = self.easing.apply((value - i0) / (i1 - i0));
        o0 + (o1 - o0) * t
    }
}

/// Visual property a track drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    /// Vertical offset in percent of the element's own height.
    TranslatePercentY,
    Scale,
    /// Blur radius in px.
    Blur,
    Brightness,
    HeightPercent,
    /// Horizontal offset as a signed fraction of the element's overflow width.
    OverflowX,
    /// Background lightness in [0, 1].
    BackgroundLightness,
}

/// What a track's keyframe inputs are measured in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackInput {
    /// The region's [`ScrollFraction`].
    #[default]
    Fraction,
    /// Pixels scrolled past the region start.
    Pixels,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub input: TrackInput,
    pub keyframes: Keyframes,
}

impl Track {
    pub fn new(property: Property, keyframes: Keyframes) -> Self {
        Self {
            property,
            input: TrackInput::Fraction,
            keyframes,
        }
    }

    /// Eased two-stop track over a pixel distance from the region start.
    pub fn over_pixels(
        property: Property,
        pixels: (f32, f32),
        output: (f32, f32),
        easing: Easing,
    ) -> Self {
        Self {
            property,
            input: TrackInput::Pixels,
            keyframes: Keyframes::linear(pixels, output).with_easing(easing),
        }
    }

    pub fn linear(property: Property, input: (f32, f32), output: (f32, f32)) -> Self {
        Self::new(property, Keyframes::linear(input, output))
    }

    #[inline]
    pub fn value(&self, sample: &ScrollSample) -> f32 {
        match self.input {
            TrackInput::Fraction => self.keyframes.sample(sample.fraction.get()),
            TrackInput::Pixels => self.keyframes.sample(sample.scrolled),
        }
    }
}

/// One published scroll reading. Consumers only ever see whole samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub fraction: ScrollFraction,
    pub offset: f32,
    /// `offset` relative to the region start; negative before the region.
    pub scrolled: f32,
    /// Monotonic publish counter; two samples with equal ids are the same event.
    pub id: u64,
}

/// Single source of truth for one region's fraction.
#[derive(Clone, Debug)]
pub struct ScrollPublisher {
    region: ScrollRegion,
    latest: ScrollSample,
}

impl ScrollPublisher {
    pub fn new(region: ScrollRegion) -> Self {
        Self {
            region,
            latest: ScrollSample::default(),
        }
    }

    /// Geometry changes (resize, layout) re-derive the region; the next
    /// publish uses it.
    pub fn set_region(&mut self, region: ScrollRegion) {
        self.region = region;
    }

    pub fn publish(&mut self, offset: f32) -> ScrollSample {
        self.latest = ScrollSample {
            fraction: self.region.fraction(offset),
            offset,
            scrolled: offset - self.region.start,
            id: self.latest.id + 1,
        };
        self.latest
    }

    pub fn latest(&self) -> ScrollSample {
        self.latest
    }
}
