use crate::constants::*;
use crate::error::{MotionError, MotionResult};
use crate::surface::{DrawSurface, GradientStop, Rgba};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// What happens to a point that leaves the surface band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    /// Teleport to the opposite margin so the field reads as infinite.
    Wrap,
    /// Reflect the velocity and clamp into the band.
    Bounce,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub connection_distance: f32,
    pub influence_radius: f32,
    pub attraction: f32,
    pub damping: f32,
    pub edge: EdgeMode,
    pub wrap_margin: f32,
    /// Connections only join points whose depths differ by less than this.
    pub depth_band: Option<f32>,
    pub depth_range: (f32, f32),
    pub speed_max: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub pulse_amplitude: f32,
    pub pulse_rate: f32,
    pub line_opacity_scale: f32,
    pub line_width: f32,
    pub accent_depth: f32,
    pub accent_rgb: [u8; 3],
    pub node_rgb: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: NODE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            influence_radius: POINTER_INFLUENCE_RADIUS,
            attraction: POINTER_ATTRACTION,
            damping: VELOCITY_DAMPING,
            edge: EdgeMode::Wrap,
            wrap_margin: WRAP_MARGIN,
            depth_band: Some(DEPTH_BAND),
            depth_range: (DEPTH_MIN, DEPTH_MAX),
            speed_max: SPEED_MAX,
            radius_range: (RADIUS_MIN, RADIUS_MAX),
            opacity_range: (BASE_OPACITY_MIN, BASE_OPACITY_MAX),
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_rate: PULSE_RATE,
            line_opacity_scale: LINE_OPACITY_SCALE,
            line_width: LINE_WIDTH,
            accent_depth: ACCENT_DEPTH,
            accent_rgb: ACCENT_RGB,
            node_rgb: NODE_RGB,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> MotionResult<()> {
        if self.count == 0 {
            return Err(MotionError::EmptyField);
        }
        for (name, value) in [
            ("connection_distance", self.connection_distance),
            ("influence_radius", self.influence_radius),
        ] {
            if !(value > 0.0) {
                return Err(MotionError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("wrap_margin", self.wrap_margin),
            ("speed_max", self.speed_max),
            ("pulse_amplitude", self.pulse_amplitude),
            ("pulse_rate", self.pulse_rate),
        ] {
            if !(value >= 0.0) {
                return Err(MotionError::Negative { name, value });
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(MotionError::Damping(self.damping));
        }
        for (name, (min, max)) in [
            ("depth_range", self.depth_range),
            ("radius_range", self.radius_range),
            ("opacity_range", self.opacity_range),
        ] {
            if !(min <= max) || min < 0.0 {
                return Err(MotionError::InvalidRange { name, min, max });
            }
        }
        if self.depth_range.1 > 1.0 {
            return Err(MotionError::InvalidRange {
                name: "depth_range",
                min: self.depth_range.0,
                max: self.depth_range.1,
            });
        }
        Ok(())
    }
}

/// A drifting point in surface pixel space.
#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_opacity: f32,
    pub opacity: f32,
    /// 0 is far, 1 is near. Scales speed, size, opacity and line width.
    pub depth: f32,
    pub phase: f32,
}

/// A line between two points for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
    pub accent: bool,
    pub width: f32,
}

/// Line opacity for two points `distance` apart.
///
/// Decays linearly from `endpoint_opacity * scale` at distance 0 to exactly
/// 0 at `threshold` and beyond.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32, endpoint_opacity: f32, scale: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / threshold) * endpoint_opacity * scale
}

pub struct ParticleField {
    pub config: FieldConfig,
    pub points: Vec<Point>,
    size: Vec2,
    pointer: Option<Vec2>,
    time: f32,
    frame: u64,
}

impl ParticleField {
    pub fn new(config: FieldConfig, size: Vec2, seed: u64) -> MotionResult<Self> {
        config.validate()?;
        let size = size.max(Vec2::ONE);
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..config.count)
            .map(|_| spawn_point(&config, size, &mut rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} points on {:.0}x{:.0}",
            points.len(),
            size.x,
            size.y
        );
        Ok(Self {
            config,
            points,
            size,
            pointer: None,
            time: 0.0,
            frame: 0,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Bounds change only; points wrap into the new bounds on their own.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ONE);
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn step(&mut self) {
        self.time += self.config.pulse_rate;
        self.frame += 1;
        let cfg = &self.config;
        let size = self.size;
        for p in &mut self.points {
            p.position += p.velocity;

            if let Some(pointer) = self.pointer {
                let delta = pointer - p.position;
                let dist = delta.length();
                if dist < cfg.influence_radius {
                    let force = (1.0 - dist / cfg.influence_radius) * cfg.attraction;
                    p.velocity += delta * force;
                }
            }

            p.velocity *= cfg.damping;

            match cfg.edge {
                EdgeMode::Wrap => wrap_point(p, size, cfg.wrap_margin),
                EdgeMode::Bounce => bounce_point(p, size, cfg.wrap_margin),
            }

            p.opacity = (p.base_opacity + (self.time + p.phase).sin() * cfg.pulse_amplitude)
                .clamp(0.0, 1.0);
        }
    }

    /// Pairwise connections for the current positions. O(n^2).
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let cfg = &self.config;
        let threshold_sq = cfg.connection_distance * cfg.connection_distance;
        self.points.iter().enumerate().flat_map(move |(i, a)| {
            self.points[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let dist_sq = a.position.distance_squared(b.position);
                    if dist_sq >= threshold_sq {
                        return None;
                    }
                    if let Some(band) = cfg.depth_band {
                        if (a.depth - b.depth).abs() >= band {
                            return None;
                        }
                    }
                    let distance = dist_sq.sqrt();
                    Some(Connection {
                        a: i,
                        b: i + 1 + k,
                        distance,
                        opacity: connection_opacity(
                            distance,
                            cfg.connection_distance,
                            a.opacity,
                            cfg.line_opacity_scale,
                        ),
                        accent: a.depth > cfg.accent_depth,
                        width: cfg.line_width * a.depth,
                    })
                })
        })
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let cfg = &self.config;
        surface.clear();
        let accent = Rgba::new(cfg.accent_rgb, 0.02);
        let node = Rgba::new(cfg.node_rgb, 0.05);
        surface.fill_linear_gradient(
            Vec2::ZERO,
            self.size,
            &[
                GradientStop { offset: 0.0, color: accent },
                GradientStop { offset: 0.5, color: node },
                GradientStop { offset: 1.0, color: accent },
            ],
        );
        for p in &self.points {
            surface.fill_circle(p.position, p.radius, Rgba::new(cfg.node_rgb, p.opacity));
        }
        for c in self.connections() {
            let color = if c.accent {
                Rgba::new(cfg.accent_rgb, c.opacity)
            } else {
                Rgba::new(cfg.node_rgb, c.opacity * DIM_LINE_FACTOR)
            };
            surface.stroke_line(
                self.points[c.a].position,
                self.points[c.b].position,
                c.width,
                color,
            );
        }
    }
}

fn spawn_point(cfg: &FieldConfig, size: Vec2, rng: &mut StdRng) -> Point {
    let depth = lerp_range(cfg.depth_range, rng.gen());
    let velocity = Vec2::new(rng.gen::<f32>() * 2.0 - 1.0, rng.gen::<f32>() * 2.0 - 1.0)
        * cfg.speed_max
        * depth;
    let base_opacity = lerp_range(cfg.opacity_range, rng.gen()) * depth;
    Point {
        position: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
        velocity,
        radius: lerp_range(cfg.radius_range, rng.gen()) * depth,
        base_opacity,
        opacity: 0.0,
        depth,
        phase: rng.gen::<f32>() * TAU,
    }
}

#[inline]
fn lerp_range((min, max): (f32, f32), t: f32) -> f32 {
    min + (max - min) * t
}

fn wrap_point(p: &mut Point, size: Vec2, margin: f32) {
    if p.position.x < -margin {
        p.position.x = size.x + margin;
    } else if p.position.x > size.x + margin {
        p.position.x = -margin;
    }
    if p.position.y < -margin {
        p.position.y = size.y + margin;
    } else if p.position.y > size.y + margin {
        p.position.y = -margin;
    }
}

fn bounce_point(p: &mut Point, size: Vec2, margin: f32) {
    let lo = Vec2::splat(-margin);
    let hi = size + Vec2::splat(margin);
    if p.position.x < lo.x || p.position.x > hi.x {
        p.velocity.x = -p.velocity.x;
    }
    if p.position.y < lo.y || p.position.y > hi.y {
        p.velocity.y = -p.velocity.y;
    }
    p.position = p.position.clamp(lo, hi);
}
