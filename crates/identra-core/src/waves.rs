use crate::surface::{DrawSurface, GradientStop, Rgba};
use crate::constants::ACCENT_RGB;
use glam::Vec2;

/// Superposed sine-wave ribbons drawn behind the hero.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    pub waves: usize,
    /// Samples per wave across the surface width.
    pub resolution: usize,
    pub time_step: f32,
    pub line_width: f32,
    pub rgb: [u8; 3],
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            waves: 5,
            resolution: 200,
            time_step: 0.005,
            line_width: 1.5,
            rgb: ACCENT_RGB,
        }
    }
}

/// Vertical position of wave `index` at horizontal pixel `x`.
///
/// Three harmonics around the vertical centre; the first one's amplitude
/// breathes slowly with `time`, and each wave sits 20 px below the previous.
#[inline]
pub fn wave_y(index: usize, x: f32, time: f32, height: f32) -> f32 {
    let i = index as f32;
    let speed = 1.0 + i * 0.5;
    let sx = x * 0.002;
    height / 2.0
        + (sx * 5.0 + time * speed + i).sin() * 100.0 * (time * 0.2).sin()
        + (sx * 10.0 - time).cos() * 50.0
        + (sx * 20.0 + time * 2.0).sin() * 20.0
        + i * 20.0
}

/// Stroke opacity of wave `index`; deeper waves are brighter.
#[inline]
pub fn wave_opacity(index: usize, waves: usize) -> f32 {
    0.1 + (index as f32 / waves.max(1) as f32) * 0.15
}

pub struct WaveField {
    pub config: WaveConfig,
    time: f32,
    scratch: Vec<Vec2>,
}

impl WaveField {
    pub fn new(config: WaveConfig) -> Self {
        let scratch = Vec::with_capacity(config.resolution + 1);
        Self {
            config,
            time: 0.0,
            scratch,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn step(&mut self) {
        self.time += self.config.time_step;
    }

    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let size = surface.size();
        surface.clear();
        surface.fill_linear_gradient(
            Vec2::ZERO,
            Vec2::new(0.0, size.y),
            &[
                GradientStop { offset: 0.0, color: Rgba::new([0, 0, 0], 0.0) },
                GradientStop { offset: 1.0, color: Rgba::new(self.config.rgb, 0.05) },
            ],
        );
        let samples = self.config.resolution.max(1);
        for i in 0..self.config.waves {
            self.scratch.clear();
            self.scratch.extend((0..=samples).map(|s| {
                let x = size.x * s as f32 / samples as f32;
                Vec2::new(x, wave_y(i, x, self.time, size.y))
            }));
            surface.stroke_polyline(
                &self.scratch,
                self.config.line_width,
                Rgba::new(self.config.rgb, wave_opacity(i, self.config.waves)),
            );
        }
    }
}
