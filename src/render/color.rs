use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An sRGB colour with straight alpha in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const SKY: Color = Color::rgb(0xAE, 0xD6, 0xF1);
    pub const PEACH: Color = Color::rgb(0xF5, 0xCB, 0xA7);

    /// Colours handed out to spawned balls
    pub const PALETTE: [Color; 9] = [
        Color::GREEN,
        Color::RED,
        Color::YELLOW,
        Color::SKY,
        Color::WHITE,
        Color::PEACH,
        Color::PINK,
        Color::ORANGE,
        Color::CYAN,
    ];

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour with alpha, clamped into `[0, 1]`
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// Same colour with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A colour stop of a radial gradient; `offset` runs from the center (0) to the rim (1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Halo drawn around a filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f64,
}
