use crate::math::Vector2;
use crate::render::{Canvas, Color, GradientStop, Glow};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vector2,
        radius: f64,
        color: Color,
    },
    RadialGradient {
        center: Vector2,
        radius: f64,
        stops: Vec<GradientStop>,
        glow: Glow,
    },
    Arrow {
        from: Vector2,
        to: Vector2,
        color: Color,
        line_width: f64,
        head_radius: f64,
    },
}

impl DrawCommand {
    /// Screen-space anchor point of the command
    pub fn position(&self) -> Vector2 {
        match self {
            DrawCommand::Circle { center, .. } => *center,
            DrawCommand::RadialGradient { center, .. } => *center,
            DrawCommand::Arrow { from, .. } => *from,
        }
    }
}

/// Headless canvas that keeps every draw call of the current frame
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Removes all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns whether nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_radial_gradient(&mut self, center: Vector2, radius: f64, stops: &[GradientStop], glow: Glow) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
            glow,
        });
    }

    fn draw_arrow(&mut self, from: Vector2, to: Vector2, color: Color, line_width: f64, head_radius: f64) {
        self.commands.push(DrawCommand::Arrow {
            from,
            to,
            color,
            line_width,
            head_radius,
        });
    }
}
