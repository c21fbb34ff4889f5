use crate::core::{ForceMode, GravityLaw};
use crate::error::SandboxError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Regime parameters of a scene
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Width of the world in world units; the height follows the canvas aspect ratio
    pub world_width: f64,

    /// Screen padding around the drawable area, in pixels
    pub padding: f64,

    /// Surface mode: velocity lost per frame. Space mode: scaled by `gravity_scale` into G
    pub gravity: f64,

    /// Fraction of vertical speed kept when bouncing off the ground
    pub elasticity: f64,

    /// Fraction of horizontal speed lost when bouncing off the ground
    pub friction: f64,

    /// The active force regime
    pub mode: ForceMode,

    /// Distance falloff of the space-mode attraction
    pub gravity_law: GravityLaw,

    /// Factor turning `gravity` into the space-mode gravitational constant
    pub gravity_scale: f64,

    /// Freezes physics; rendering continues
    pub paused: bool,

    /// Draw a velocity arrow on every non-anchor body
    pub show_velocity_vector: bool,

    /// Draw an acceleration arrow on every non-anchor body
    pub show_acceleration_vector: bool,

    /// Queue sound cues for the presentation layer
    pub play_sound: bool,

    /// Trail length given to spawned bodies (0 = unbounded)
    pub trail_limit: usize,

    /// Upward speed a ground bounce needs before it is audible
    pub wall_sound_threshold: f64,

    /// Smallest offset the anchor lock will pan by
    pub recenter_epsilon: f64,

    /// Random placements tried before a spawn gives up
    pub placement_attempts: u32,

    /// Mass given to a freshly spawned anchor
    pub anchor_mass: f64,

    /// Anchor mass above which the anchor is drawn as a hotter, larger star
    pub anchor_heavy_mass: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_width: 1000.0,
            padding: 2.0,
            gravity: 0.4,
            elasticity: 0.9,
            friction: 0.06,
            mode: ForceMode::default(),
            gravity_law: GravityLaw::default(),
            gravity_scale: 1.0e-4,
            paused: false,
            show_velocity_vector: false,
            show_acceleration_vector: false,
            play_sound: false,
            trail_limit: 100,
            wall_sound_threshold: 3.0,
            recenter_epsilon: 0.001,
            placement_attempts: 1000,
            anchor_mass: 2000.0,
            anchor_heavy_mass: 5001.0,
        }
    }
}

impl SceneConfig {
    /// Default configuration for the given regime
    pub fn for_mode(mode: ForceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Gravitational constant used by the space-mode attraction
    #[inline]
    pub fn gravity_constant(&self) -> f64 {
        self.gravity * self.gravity_scale
    }

    /// Checks that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.world_width.is_finite() && self.world_width > 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "world width must be positive, got {}",
                self.world_width
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "padding must be non-negative, got {}",
                self.padding
            )));
        }
        for (label, value) in [
            ("gravity", self.gravity),
            ("elasticity", self.elasticity),
            ("friction", self.friction),
            ("gravity scale", self.gravity_scale),
            ("wall sound threshold", self.wall_sound_threshold),
            ("recenter epsilon", self.recenter_epsilon),
        ] {
            if !value.is_finite() {
                return Err(SandboxError::InvalidParameter(format!("{} must be finite", label)));
            }
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(SandboxError::InvalidParameter(format!(
                "friction must lie in [0, 1], got {}",
                self.friction
            )));
        }
        if self.elasticity < 0.0 {
            return Err(SandboxError::InvalidParameter(format!(
                "elasticity must be non-negative, got {}",
                self.elasticity
            )));
        }
        if !(self.anchor_mass.is_finite() && self.anchor_mass > 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "anchor mass must be positive, got {}",
                self.anchor_mass
            )));
        }
        Ok(())
    }
}
