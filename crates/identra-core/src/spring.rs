use crate::constants::{MAGNET_DAMPING_RATIO, MAGNET_OMEGA, MAGNET_STRENGTH};
use glam::Vec2;

/// Damped spring that chases a target offset.
///
/// Drives magnetic elements: while hovered the target is the pointer offset
/// from the element centre scaled by `strength`; on leave it returns to zero
/// with an elastic overshoot when `damping_ratio < 1`.
#[derive(Clone, Debug)]
pub struct SpringFollower {
    pub omega: f32,
    pub damping_ratio: f32,
    pub strength: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    target: Vec2,
}

impl Default for SpringFollower {
    fn default() -> Self {
        Self::new(MAGNET_OMEGA, MAGNET_DAMPING_RATIO, MAGNET_STRENGTH)
    }
}

impl SpringFollower {
    pub fn new(omega: f32, damping_ratio: f32, strength: f32) -> Self {
        Self {
            omega: omega.max(0.0),
            damping_ratio: damping_ratio.max(0.0),
            strength,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
        }
    }

    /// Pointer offset from the element centre.
    pub fn pull(&mut self, offset: Vec2) {
        self.target = offset * self.strength;
    }

    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Semi-implicit Euler step; large `dt` is split so the spring stays stable.
    pub fn step(&mut self, dt_secs: f32) -> Vec2 {
        let k = self.omega * self.omega;
        let c = 2.0 * self.omega * self.damping_ratio;
        let mut remaining = dt_secs.clamp(0.0, 0.25);
        while remaining > 0.0 {
            let h = remaining.min(1.0 / 120.0);
            let accel = (self.target - self.position) * k - self.velocity * c;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.position.distance(self.target) < epsilon && self.velocity.length() < epsilon
    }
}
