use crate::math::Point;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circle used for hit testing. Not an owned scene entity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center in world coordinates
    pub center: Point,

    /// Radius, never negative
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle; negative radii are clamped to zero
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Returns true if this circle touches or overlaps `other`
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        hit_test(self, other)
    }
}

/// True iff the squared distance between centers is at most `(r1 + r2)^2`.
///
/// Touching circles count as a hit.
#[inline]
pub fn hit_test(c1: &Circle, c2: &Circle) -> bool {
    let reach = c1.radius + c2.radius;
    c1.center.distance_squared(&c2.center) <= reach * reach
}
