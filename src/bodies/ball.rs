use std::any::Any;

use rand::Rng;
use tracing::trace;

use crate::bodies::ObjectFlags;
use crate::collision::{bounce_off_walls, resolve_elastic, Impactor};
use crate::core::{
    CollisionEvent, CollisionKind, CollisionOutcome, EventQueue, ForceMode, Neighbors,
    NeighborsMut, ObjectState, SceneContext, SceneObject, SoundCue, ANCHOR_NAME,
};
use crate::error::SandboxError;
use crate::forces::{apply_surface_gravity, mutual_acceleration, Attractor};
use crate::math::{clamp, hit_test, to_radians, Circle, Point, Vector2};
use crate::render::{Canvas, Color, GradientStop, Glow};
use crate::Result;

/// Velocity arrows are red, acceleration arrows green
const VELOCITY_ARROW: Color = Color { r: 255, g: 0, b: 0, a: 0.5 };
const ACCELERATION_ARROW: Color = Color { r: 0, g: 255, b: 0, a: 0.5 };
const ARROW_WIDTH: f64 = 2.0;
const ARROW_HEAD: f64 = 6.0;
/// Arrow length bounds, in world units before projection
const ARROW_MIN: f64 = 10.0;
const ARROW_MAX: f64 = 100.0;
const ACCELERATION_ARROW_GAIN: f64 = 200.0;

/// Construction parameters of a [`Ball`]
#[derive(Debug, Clone, PartialEq)]
pub struct BallOptions {
    /// Initial center in world coordinates
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    /// Launch speed in world units per frame
    pub speed: f64,
    /// Launch direction in degrees, counter-clockwise from +x
    pub angle: f64,
    pub mass: f64,
    /// Record a trail of past positions
    pub trace: bool,
    /// Trail length (0 = unbounded)
    pub trace_limit: usize,
    /// Make this ball the scene's anchor. Always set for the reserved name `"sun"`.
    pub anchor: bool,
}

impl Default for BallOptions {
    fn default() -> Self {
        Self {
            center: Point::zero(),
            radius: 5.0,
            color: Color::WHITE,
            speed: 0.0,
            angle: 0.0,
            mass: 50.0,
            trace: false,
            trace_limit: 0,
            anchor: false,
        }
    }
}

/// A moving, colliding circular body
#[derive(Debug, Clone)]
pub struct Ball {
    state: ObjectState,
    radius: f64,
    color: Color,
    speed: f64,
    angle: f64,
    mass: f64,
    velocity: Vector2,
    /// Last space-mode acceleration, kept for the overlay only
    acceleration: Option<Vector2>,
}

impl Ball {
    /// Creates a ball and applies its launch velocity once, so the first
    /// frame already shows it displaced
    pub fn new(name: impl Into<String>, options: BallOptions) -> Result<Self> {
        let name = name.into();
        if !(options.radius.is_finite() && options.radius >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "radius of {} must be non-negative, got {}",
                name, options.radius
            )));
        }
        check_mass(&name, options.mass)?;
        if !(options.center.is_finite() && options.speed.is_finite() && options.angle.is_finite()) {
            return Err(SandboxError::InvalidParameter(format!(
                "center, speed and angle of {} must be finite",
                name
            )));
        }

        let mut state = ObjectState::new(name, options.center);
        state.flags_mut().set(ObjectFlags::TRACE, options.trace);
        let anchor = options.anchor || state.name() == ANCHOR_NAME;
        state.flags_mut().set(ObjectFlags::ANCHOR, anchor);
        state.trail_mut().set_limit(options.trace_limit);

        let mut ball = Self {
            state,
            radius: options.radius,
            color: options.color,
            speed: options.speed,
            angle: options.angle,
            mass: options.mass,
            velocity: Vector2::from_polar(options.speed, to_radians(options.angle)),
            acceleration: None,
        };
        ball.integrate();
        Ok(ball)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "radius of {} must be non-negative, got {}",
                self.state.name(),
                radius
            )));
        }
        self.radius = radius;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        check_mass(self.state.name(), mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Launch speed the ball was created with
    pub fn launch_speed(&self) -> f64 {
        self.speed
    }

    /// Launch direction in degrees
    pub fn launch_angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Acceleration of the last space-mode step
    pub fn acceleration(&self) -> Option<Vector2> {
        self.acceleration
    }

    /// Hit-test shape
    pub fn circle(&self) -> Circle {
        Circle::new(self.state.position(), self.radius)
    }

    pub fn set_anchor(&mut self, anchor: bool) {
        self.state.flags_mut().set(ObjectFlags::ANCHOR, anchor);
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.state.flags_mut().set(ObjectFlags::TRACE, trace);
    }

    fn impactor(&self) -> Impactor {
        Impactor {
            position: self.state.position(),
            velocity: self.velocity,
            mass: self.mass,
        }
    }

    /// Explicit Euler, one frame per time unit
    fn integrate(&mut self) {
        let velocity = self.velocity;
        *self.state.position_mut() += velocity;
    }

    fn apply_forces(&mut self, ctx: &SceneContext<'_>, others: Neighbors<'_>) {
        let config = ctx.config;
        match config.mode {
            ForceMode::SurfaceGravity => {
                self.velocity = apply_surface_gravity(self.velocity, config.gravity);
            }
            ForceMode::SpaceGravity => {
                let attractors = others.iter().filter_map(|other| {
                    other.as_ball().map(|ball| Attractor {
                        position: ball.position(),
                        mass: ball.mass,
                    })
                });
                let acceleration = mutual_acceleration(
                    self.state.position(),
                    self.mass,
                    attractors,
                    config.gravity_constant(),
                    config.gravity_law,
                );
                self.velocity += acceleration;
                self.acceleration = Some(acceleration);
            }
        }
    }

    fn draw_overlay(&self, ctx: &SceneContext<'_>, canvas: &mut dyn Canvas, direction: Vector2, length: f64, color: Color) {
        if direction.is_null() {
            return;
        }
        let viewport = ctx.viewport;
        let position = self.state.position();
        let tip = position + direction.normalize() * clamp(length, ARROW_MIN, ARROW_MAX);
        canvas.draw_arrow(viewport.to_screen(position), viewport.to_screen(tip), color, ARROW_WIDTH, ARROW_HEAD);
    }
}

fn check_mass(name: &str, mass: f64) -> Result<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(SandboxError::InvalidParameter(format!(
            "mass of {} must be positive, got {}",
            name, mass
        )))
    }
}

impl SceneObject for Ball {
    fn state(&self) -> &ObjectState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ObjectState {
        &mut self.state
    }

    fn advance(&mut self, ctx: &SceneContext<'_>, others: Neighbors<'_>, events: &mut EventQueue) {
        self.state.record_trace();
        self.apply_forces(ctx, others);
        self.integrate();

        if ctx.config.mode != ForceMode::SurfaceGravity {
            return;
        }
        let contact = bounce_off_walls(
            self.state.position_mut(),
            &mut self.velocity,
            self.radius,
            ctx.viewport,
            ctx.config,
        );
        if let Some(contact) = contact {
            trace!(ball = self.state.name(), ?contact, "wall bounce");
            events.add_collision_event(CollisionEvent::wall(self.state.name()));
            if ctx.config.play_sound && self.velocity.y > ctx.config.wall_sound_threshold {
                events.add_sound_cue(SoundCue::WallHit);
            }
        }
    }

    fn resolve_collision(
        &mut self,
        ctx: &SceneContext<'_>,
        mut others: NeighborsMut<'_>,
        events: &mut EventQueue,
    ) -> CollisionOutcome {
        if self.is_anchor() {
            return CollisionOutcome::None;
        }
        let own = self.circle();
        for other in others.iter_mut() {
            let Some(target) = other.as_ball_mut() else {
                continue;
            };
            if !hit_test(&target.circle(), &own) {
                continue;
            }
            let other_name = target.state.name().to_owned();

            if ctx.config.mode == ForceMode::SpaceGravity && target.is_anchor() {
                if ctx.config.play_sound {
                    events.add_sound_cue(SoundCue::Absorbed);
                }
                events.add_collision_event(CollisionEvent::between(
                    CollisionKind::Absorbed,
                    self.state.name(),
                    &other_name,
                ));
                return CollisionOutcome::Absorbed { by: other_name };
            }

            if ctx.config.play_sound {
                events.add_sound_cue(SoundCue::BallHit);
            }
            let (v1, v2) = resolve_elastic(&self.impactor(), &target.impactor());
            self.velocity = v1;
            target.velocity = v2;
            self.integrate();
            target.integrate();
            events.add_collision_event(CollisionEvent::between(
                CollisionKind::Body,
                self.state.name(),
                &other_name,
            ));
            return CollisionOutcome::Collided { with: other_name };
        }
        CollisionOutcome::None
    }

    fn draw(&self, ctx: &SceneContext<'_>, canvas: &mut dyn Canvas) {
        if self.radius <= 0.0 {
            return;
        }
        let config = ctx.config;
        let viewport = ctx.viewport;
        let center = viewport.to_screen(self.state.position());
        let anchor = self.is_anchor();

        if !anchor && config.show_velocity_vector {
            let length = self.radius * self.speed * 2.0;
            self.draw_overlay(ctx, canvas, self.velocity, length, VELOCITY_ARROW);
        }
        if !anchor && config.show_acceleration_vector {
            if let Some(acceleration) = self.acceleration {
                let length = acceleration.magnitude() * ACCELERATION_ARROW_GAIN;
                self.draw_overlay(ctx, canvas, acceleration, length, ACCELERATION_ARROW);
            }
        }

        let radius = viewport.scale() * self.radius;
        if anchor {
            let heavy = self.mass > config.anchor_heavy_mass;
            let stops = if heavy {
                [
                    GradientStop::new(0.0, Color::LIGHT_BLUE),
                    GradientStop::new(0.8, Color::CYAN),
                    GradientStop::new(1.0, Color::WHITE),
                ]
            } else {
                [
                    GradientStop::new(0.0, Color::RED),
                    GradientStop::new(0.8, Color::ORANGE),
                    GradientStop::new(1.0, Color::YELLOW),
                ]
            };
            let glow = Glow {
                color: if heavy { Color::WHITE } else { Color::YELLOW },
                blur: 25.0 + rand::thread_rng().gen_range(0..=7) as f64,
            };
            canvas.fill_radial_gradient(center, radius, &stops, glow);
        } else {
            canvas.fill_circle(center, radius, self.color);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
