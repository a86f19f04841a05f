use std::f32::consts::TAU;

/// Easing curves used by reveals and cross-fades. All map 0 to 0 and 1 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out.
    EaseOut,
    /// `power{n}.in`: `t^(n + 1)`.
    PowerIn(u8),
    /// `power{n}.out`: `1 - (1 - t)^(n + 1)`.
    PowerOut(u8),
    /// `power{n}.inOut`.
    PowerInOut(u8),
    /// Overshooting settle, amplitude 1, period 0.3.
    ElasticOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::PowerIn(n) => t.powi(n as i32 + 1),
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32 + 1),
            Easing::PowerInOut(n) => {
                let p = n as i32 + 1;
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(p)
                } else {
                    1.0 - 0.5 * (2.0 * (1.0 - t)).powi(p)
                }
            }
            Easing::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let period = 0.3;
                let s = period / 4.0;
                2f32.powf(-10.0 * t) * ((t - s) * TAU / period).sin() + 1.0
            }
        }
    }
}

/// Time-driven interpolation between two values.
#[derive(Clone, Debug)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub easing: Easing,
    elapsed: f32,
    /// Endpoints and duration of the tween as built; `reverse` swings
    /// between these.
    ends: (f32, f32),
    full_secs: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_secs: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_secs,
            delay_secs: 0.0,
            easing,
            elapsed: 0.0,
            ends: (from, to),
            full_secs: duration_secs,
        }
    }

    pub fn with_delay(mut self, delay_secs: f32) -> Self {
        self.delay_secs = delay_secs.max(0.0);
        self
    }

    pub fn advance(&mut self, dt_secs: f32) -> f32 {
        self.elapsed += dt_secs.max(0.0);
        self.value()
    }

    /// Linear progress in [0, 1], delay excluded.
    pub fn progress(&self) -> f32 {
        let t = self.elapsed - self.delay_secs;
        if self.duration_secs <= 0.0 {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        (t / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Play backwards from the current value (scroll-triggered reveals
    /// reverse when the trigger is scrolled back past).
    /// The duration scales with the distance left to cover.
    pub fn reverse(&mut self) {
        let current = self.value();
        let (start, end) = self.ends;
        let target = if self.to == end { start } else { end };
        let span = (end - start).abs();
        self.duration_secs = if span > 0.0 {
            self.full_secs * (target - current).abs() / span
        } else {
            0.0
        };
        self.from = current;
        self.to = target;
        self.delay_secs = 0.0;
        self.elapsed = 0.0;
    }
}
