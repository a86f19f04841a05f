//! Discrete stages derived from a scroll fraction, with cross-faded switches.

use crate::easing::{Easing, Tween};
use crate::error::{MotionError, MotionResult};
use crate::scroll::ScrollFraction;
use smallvec::SmallVec;

/// How a fraction is bucketed into a stage index.
#[derive(Clone, Debug, PartialEq)]
pub enum StagePolicy {
    /// `floor(f * N)`, with f = 1 folded into the last stage.
    Floor,
    /// `round(f * (N - 1))`; stage centres sit on evenly spaced fractions.
    Round,
    /// Ascending breakpoints in (0, 1); the stage index is the number of
    /// breakpoints at or below the fraction. Needs exactly `N - 1` entries.
    Thresholds(SmallVec<[f32; 8]>),
}

impl StagePolicy {
    pub fn thresholds(breakpoints: &[f32]) -> Self {
        StagePolicy::Thresholds(SmallVec::from_slice(breakpoints))
    }

    pub fn select(&self, fraction: ScrollFraction, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let last = count - 1;
        let f = fraction.get();
        let index = match self {
            StagePolicy::Floor => (f * count as f32).floor() as usize,
            StagePolicy::Round => (f * last as f32).round() as usize,
            StagePolicy::Thresholds(bps) => bps.iter().take_while(|&&b| b <= f).count(),
        };
        index.min(last)
    }

    fn validate(&self, count: usize) -> MotionResult<()> {
        if let StagePolicy::Thresholds(bps) = self {
            if bps.len() + 1 != count {
                return Err(MotionError::BreakpointCount {
                    breakpoints: bps.len(),
                    stages: count,
                });
            }
            let in_range = bps.iter().all(|&b| b > 0.0 && b < 1.0);
            let sorted = bps.windows(2).all(|w| w[0] < w[1]);
            if !in_range || !sorted {
                return Err(MotionError::Breakpoints(bps.to_vec()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    pub from: usize,
    pub to: usize,
}

/// Tracks the active stage and fades every stage toward its target
/// visibility. A switch that lands mid-fade continues from the current
/// visibilities, so nothing snaps on fast scrolls.
#[derive(Clone, Debug)]
pub struct Choreographer {
    names: Vec<&'static str>,
    policy: StagePolicy,
    crossfade_secs: f32,
    active: usize,
    /// One fade per stage, heading to 1 for the active stage and 0 otherwise.
    fades: Vec<Tween>,
}

fn settled(visibility: f32) -> Tween {
    Tween::new(visibility, visibility, 0.0, Easing::EaseOut)
}

impl Choreographer {
    pub fn new(
        names: &[&'static str],
        policy: StagePolicy,
        crossfade_secs: f32,
    ) -> MotionResult<Self> {
        if names.is_empty() {
            return Err(MotionError::NoStages);
        }
        policy.validate(names.len())?;
        let fades = (0..names.len())
            .map(|i| settled(if i == 0 { 1.0 } else { 0.0 }))
            .collect();
        Ok(Self {
            names: names.to_vec(),
            policy,
            crossfade_secs: crossfade_secs.max(0.0),
            active: 0,
            fades,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_name(&self) -> &'static str {
        self.names[self.active]
    }

    pub fn select(&self, fraction: ScrollFraction) -> usize {
        self.policy.select(fraction, self.names.len())
    }

    /// Re-derives the stage; returns the change if the stage moved.
    pub fn update(&mut self, fraction: ScrollFraction) -> Option<StageChange> {
        let next = self.select(fraction);
        if next == self.active {
            return None;
        }
        let change = StageChange {
            from: self.active,
            to: next,
        };
        log::debug!(
            "[stage] {} -> {} at {:.3}",
            self.names[change.from],
            self.names[change.to],
            fraction.get()
        );
        self.retarget(change.from, 0.0);
        self.retarget(change.to, 1.0);
        self.active = next;
        Some(change)
    }

    fn retarget(&mut self, index: usize, target: f32) {
        let current = self.fades[index].value();
        self.fades[index] = Tween::new(current, target, self.crossfade_secs, Easing::EaseOut);
    }

    pub fn advance(&mut self, dt_secs: f32) {
        for fade in &mut self.fades {
            fade.advance(dt_secs);
        }
    }

    pub fn is_fading(&self) -> bool {
        self.fades.iter().any(|f| !f.is_finished())
    }

    /// Opacity of a stage's subtree. In a plain switch the incoming stage
    /// fades in while the outgoing one fades out by the complementary amount.
    pub fn visibility(&self, index: usize) -> f32 {
        self.fades.get(index).map_or(0.0, Tween::value)
    }

    /// Whether a stage still needs its subtree attached.
    pub fn is_mounted(&self, index: usize) -> bool {
        index == self.active || self.visibility(index) > 0.0
    }
}
