use crate::math::{Point, Vector2};

/// Kinematic state of one side of a collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impactor {
    pub position: Point,
    pub velocity: Vector2,
    pub mass: f64,
}

/// Post-collision velocities of a perfectly elastic two-body collision.
///
/// Both velocities are rotated into the frame whose x axis is the line of
/// centers, the 1-D elastic formulas are applied along that axis, the
/// tangential components are kept, and the results are rotated back.
/// Coincident centers fall back to the world x axis as the line of centers.
pub fn resolve_elastic(a: &Impactor, b: &Impactor) -> (Vector2, Vector2) {
    let normal = Vector2::between(b.position, a.position);
    let collision_angle = normal.angle();

    let u1 = a.velocity.rotate(-collision_angle);
    let u2 = b.velocity.rotate(-collision_angle);

    let total = a.mass + b.mass;
    let final_x1 = ((a.mass - b.mass) * u1.x + 2.0 * b.mass * u2.x) / total;
    let final_x2 = (2.0 * a.mass * u1.x + (b.mass - a.mass) * u2.x) / total;

    let v1 = Vector2::new(final_x1, u1.y).rotate(collision_angle);
    let v2 = Vector2::new(final_x2, u2.y).rotate(collision_angle);
    (v1, v2)
}

/// Total linear momentum of a set of impactors
pub fn momentum(bodies: &[Impactor]) -> Vector2 {
    bodies
        .iter()
        .fold(Vector2::zero(), |acc, b| acc + b.velocity * b.mass)
}

/// Total kinetic energy of a set of impactors
pub fn kinetic_energy(bodies: &[Impactor]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.magnitude_squared())
        .sum()
}
