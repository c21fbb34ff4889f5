//! Spawning bodies into free space.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::bodies::{Ball, BallOptions};
use crate::core::{ForceMode, Scene};
use crate::error::SandboxError;
use crate::math::{hit_test, to_degrees, Circle, Point, Vector2};
use crate::render::Color;
use crate::Result;

/// Reserved name of the anchor body
pub const ANCHOR_NAME: &str = "sun";

/// Anchor radius until its mass crosses the heavy threshold
const ANCHOR_RADIUS: f64 = 15.0;

/// Overrides for a spawned ball; every `None` is randomised
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnOptions {
    pub name: Option<String>,
    /// Explicit center. An overlapping center fails instead of being re-rolled.
    pub center: Option<Point>,
    pub color: Option<Color>,
    pub speed: Option<f64>,
    /// Degrees
    pub angle: Option<f64>,
    pub mass: Option<f64>,
}

impl SpawnOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn at(center: Point) -> Self {
        Self {
            center: Some(center),
            ..Self::default()
        }
    }
}

/// Launch direction, in degrees, of a drag from `from` to `to` in screen space.
/// Screen Y grows downward, so the angle is mirrored.
pub fn launch_angle(from: Vector2, to: Vector2) -> f64 {
    let drag = Vector2::between(from, to);
    -to_degrees(drag.angle())
}

impl Scene {
    /// Whether `circle` overlaps no existing body
    pub fn can_place(&self, circle: &Circle) -> bool {
        !self
            .objects()
            .filter_map(|object| object.as_ball())
            .any(|ball| hit_test(&ball.circle(), circle))
    }

    /// Adds a randomised ball at a free spot and returns its name.
    ///
    /// Random placements are retried with a fresh radius up to
    /// `placement_attempts` times.
    pub fn spawn_ball<R: Rng + ?Sized>(&mut self, rng: &mut R, options: SpawnOptions) -> Result<String> {
        let spread = match self.config().mode {
            ForceMode::SurfaceGravity => 10.0,
            ForceMode::SpaceGravity => 5.0,
        };
        let mut radius = 3.0 + rng.gen::<f64>() * spread;

        let center = match options.center {
            Some(center) => {
                if !self.can_place(&Circle::new(center, radius)) {
                    warn!(x = center.x, y = center.y, "spawn position is occupied");
                    return Err(SandboxError::PlacementFailed { attempts: 1 });
                }
                center
            }
            None => {
                let attempts = self.config().placement_attempts;
                let mut center = self.random_center(rng, radius);
                let mut tried = 1;
                while !self.can_place(&Circle::new(center, radius)) {
                    if tried >= attempts {
                        warn!(attempts, "no free spot to spawn a ball");
                        return Err(SandboxError::PlacementFailed { attempts });
                    }
                    radius = 5.0 + rng.gen::<f64>() * 10.0;
                    center = self.random_center(rng, radius);
                    tried += 1;
                }
                center
            }
        };

        let name = match options.name {
            Some(name) => name,
            None => self.fresh_name(rng),
        };
        let ball = Ball::new(
            name.clone(),
            BallOptions {
                center,
                radius,
                color: options
                    .color
                    .or_else(|| Color::PALETTE.choose(rng).copied())
                    .unwrap_or_default(),
                speed: options.speed.unwrap_or_else(|| rng.gen::<f64>() * 5.0),
                angle: options.angle.unwrap_or_else(|| rng.gen::<f64>() * 360.0),
                mass: options.mass.unwrap_or(radius * 10.0),
                trace: true,
                trace_limit: self.config().trail_limit,
                anchor: false,
            },
        )?;
        self.add(Box::new(ball));
        Ok(name)
    }

    /// Adds the anchor at the world center. Only space mode has an anchor;
    /// returns whether one was added.
    pub fn spawn_anchor(&mut self, mass: f64) -> Result<bool> {
        if self.config().mode != ForceMode::SpaceGravity {
            return Ok(false);
        }
        let anchor = Ball::new(
            ANCHOR_NAME,
            BallOptions {
                center: self.viewport().world_center(),
                radius: ANCHOR_RADIUS,
                color: Color::ORANGE,
                speed: 0.0,
                angle: 0.0,
                mass,
                trace: true,
                trace_limit: self.config().trail_limit,
                anchor: true,
            },
        )?;
        self.add(Box::new(anchor));
        Ok(true)
    }

    /// Spawns `count` balls named `ball-0`, `ball-1`, ... followed by the
    /// anchor in space mode
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Result<()> {
        for i in 0..count {
            self.spawn_ball(rng, SpawnOptions::named(format!("ball-{}", i)))?;
        }
        let mass = self.config().anchor_mass;
        self.spawn_anchor(mass)?;
        debug!(count, objects = self.len(), "scene populated");
        Ok(())
    }

    fn random_center<R: Rng + ?Sized>(&self, rng: &mut R, radius: f64) -> Point {
        let width = self.config().world_width;
        let height = self.visible_world_height();
        Point::new(
            radius + rng.gen::<f64>() * (width - 2.0 * radius),
            radius + rng.gen::<f64>() * (height - 2.0 * radius),
        )
    }

    fn fresh_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        loop {
            let name = format!("ball-{:08x}-{:04x}", rng.gen::<u32>(), rng.gen::<u16>());
            if !self.contains(&name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn drag_right_launches_at_zero() {
        assert_relative_eq!(launch_angle(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)), 0.0);
    }

    #[test]
    fn drag_up_screen_launches_upward() {
        // screen y decreases going up
        assert_relative_eq!(launch_angle(Vector2::new(0.0, 0.0), Vector2::new(0.0, -10.0)), 90.0);
    }
}
