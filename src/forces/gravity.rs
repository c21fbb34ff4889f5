use crate::core::GravityLaw;
use crate::math::{Point, Vector2, EPSILON};

/// A body pulling on others in space mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Point,
    pub mass: f64,
}

impl GravityLaw {
    /// Magnitude of the attraction between two masses `distance` apart
    pub fn strength(self, g: f64, m1: f64, m2: f64, distance: f64) -> f64 {
        match self {
            GravityLaw::Inverse => g * m1 * m2 / distance,
            GravityLaw::Constant => g * m1 * m2,
            GravityLaw::InverseSquare => g * m1 * m2 / (distance * distance),
        }
    }
}

/// Surface mode: the constant downward pull, applied once per frame.
/// A zero `gravity` leaves the velocity untouched.
#[inline]
pub fn apply_surface_gravity(velocity: Vector2, gravity: f64) -> Vector2 {
    if gravity == 0.0 {
        velocity
    } else {
        Vector2::new(velocity.x, velocity.y - gravity)
    }
}

/// Space mode: net acceleration felt by a body of `mass` at `position`.
///
/// Each attractor contributes `strength / mass` along the unit vector from the
/// body towards it. Attractors sitting exactly on the body have no direction
/// and contribute nothing.
pub fn mutual_acceleration<I>(position: Point, mass: f64, attractors: I, g: f64, law: GravityLaw) -> Vector2
where
    I: IntoIterator<Item = Attractor>,
{
    attractors
        .into_iter()
        .fold(Vector2::zero(), |acc, attractor| {
            let separation = Vector2::between(position, attractor.position);
            let distance = separation.magnitude();
            if distance <= EPSILON {
                return acc;
            }
            let strength = law.strength(g, mass, attractor.mass, distance);
            acc + separation.normalize() * (strength / mass)
        })
}
