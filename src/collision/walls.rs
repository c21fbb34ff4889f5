use crate::core::{SceneConfig, Viewport};
use crate::math::{Point, Vector2};

/// Boundary a body bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Right,
    Left,
    /// Above the visible world height
    Top,
    /// The ground line at world `y = 0`
    Ground,
}

/// Surface-mode boundary handling for a circle of `radius`.
///
/// Checked in fixed order (right, left, top, ground); only the first match
/// is applied. Horizontal tests and the ground test are done in screen space,
/// the top test in world space. The body is put back just inside the
/// boundary it crossed.
pub fn bounce_off_walls(
    position: &mut Point,
    velocity: &mut Vector2,
    radius: f64,
    viewport: &Viewport,
    config: &SceneConfig,
) -> Option<WallContact> {
    if viewport.to_screen_x(position.x + radius) > viewport.width() {
        velocity.x = -velocity.x;
        position.x = viewport.width() / viewport.scale() - radius - 1.0;
        Some(WallContact::Right)
    } else if viewport.to_screen_x(position.x - radius) < viewport.to_screen_x(0.0) {
        velocity.x = -velocity.x;
        position.x = radius + 1.0;
        Some(WallContact::Left)
    } else if position.y > viewport.visible_world_height() {
        velocity.y = -velocity.y;
        position.y = viewport.visible_world_height() - radius - 1.0;
        Some(WallContact::Top)
    } else if viewport.to_screen_y(position.y - radius) >= viewport.to_screen_y(0.0) {
        let damped = config.gravity != 0.0;
        if damped && config.elasticity != 0.0 {
            velocity.y = -velocity.y * config.elasticity;
        } else {
            velocity.y = -velocity.y;
        }
        if damped && config.friction != 0.0 {
            velocity.x -= velocity.x * config.friction;
        }
        position.y = radius;
        Some(WallContact::Ground)
    } else {
        None
    }
}
