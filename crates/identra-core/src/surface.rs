//! Drawing-surface abstraction.
//!
//! The simulation never touches a platform canvas directly. The web frontend
//! implements [`DrawSurface`] over a 2-D canvas context; tests use
//! [`RecordingSurface`] to inspect what a frame would have drawn.

use glam::Vec2;

/// Straight RGBA colour with a float alpha, as consumed by canvas fill/stroke styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS `rgba(...)` form.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colour stop of a linear gradient, `offset` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Write-only 2-D drawing target.
pub trait DrawSurface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_linear_gradient(&mut self, from: Vec2, to: Vec2, stops: &[GradientStop]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Gradient { stops: usize },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Polyline { points: usize, width: f32, color: Rgba },
}

/// In-memory surface that records every call; used by host-side tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_linear_gradient(&mut self, _from: Vec2, _to: Vec2, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::Gradient { stops: stops.len() });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Polyline {
            points: points.len(),
            width,
            color,
        });
    }
}
