//! Rendering collaborator.
//!
//! The simulation never draws by itself. Objects describe what they look like
//! through the [`Canvas`] trait, in screen coordinates, and the presentation
//! layer decides how to put that on a surface.

mod color;
mod recording;

pub use self::color::{Color, GradientStop, Glow};
pub use self::recording::{DrawCommand, RecordingCanvas};

use crate::math::Vector2;

/// A drawing surface in screen space (Y grows downward).
pub trait Canvas {
    /// Fills a solid circle
    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color);

    /// Fills a circle with a radial gradient and a surrounding glow
    fn fill_radial_gradient(&mut self, center: Vector2, radius: f64, stops: &[GradientStop], glow: Glow);

    /// Strokes a line from `from` to `to` and caps it with a triangular head
    fn draw_arrow(&mut self, from: Vector2, to: Vector2, color: Color, line_width: f64, head_radius: f64);
}

/// Corners of the triangular arrow head centred on `to`, first corner
/// pointing away from `from`.
pub fn arrowhead(from: Vector2, to: Vector2, radius: f64) -> [Vector2; 3] {
    let mut angle = Vector2::between(from, to).angle();
    let step = 2.0 * std::f64::consts::PI / 3.0;
    let mut corners = [Vector2::zero(); 3];
    for corner in corners.iter_mut() {
        *corner = to + Vector2::from_polar(radius, angle);
        angle += step;
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arrowhead_tip_points_along_shaft() {
        let [tip, _, _] = arrowhead(Vector2::zero(), Vector2::new(10.0, 0.0), 6.0);
        assert_relative_eq!(tip.x, 16.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, 0.0, epsilon = 1e-12);
    }
}
