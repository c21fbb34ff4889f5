//! World/screen coordinate transform.
//!
//! World Y grows upward, screen Y grows downward. The transform depends only
//! on the canvas size, the world width and the padding, never on object state.

use crate::error::SandboxError;
use crate::math::{Point, Rect, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Viewport {
    canvas_width: f64,
    canvas_height: f64,
    world_width: f64,
    padding: f64,
}

impl Viewport {
    /// Creates a transform for a canvas of the given pixel size
    pub fn new(canvas_width: f64, canvas_height: f64, world_width: f64, padding: f64) -> Result<Self> {
        if !(world_width.is_finite() && world_width > 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "world width must be positive, got {}",
                world_width
            )));
        }
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "padding must be non-negative, got {}",
                padding
            )));
        }
        let mut viewport = Self {
            canvas_width: 0.0,
            canvas_height: 0.0,
            world_width,
            padding,
        };
        viewport.resize(canvas_width, canvas_height)?;
        Ok(viewport)
    }

    /// Adopts a new canvas size. The canvas must leave room inside the padding.
    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) -> Result<()> {
        let min = 2.0 * self.padding;
        if !(canvas_width.is_finite() && canvas_height.is_finite())
            || canvas_width <= min
            || canvas_height <= min
        {
            return Err(SandboxError::InvalidParameter(format!(
                "canvas {}x{} leaves no drawable area inside padding {}",
                canvas_width, canvas_height, self.padding
            )));
        }
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        Ok(())
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn world_width(&self) -> f64 {
        self.world_width
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Drawable width in pixels (canvas minus padding on both sides)
    pub fn width(&self) -> f64 {
        self.canvas_width - 2.0 * self.padding
    }

    /// Drawable height in pixels
    pub fn height(&self) -> f64 {
        self.canvas_height - 2.0 * self.padding
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f64 {
        self.width() / self.world_width
    }

    /// World height that fits the drawable area
    pub fn visible_world_height(&self) -> f64 {
        self.height() / self.scale()
    }

    /// Center of the visible world
    pub fn world_center(&self) -> Point {
        Point::new(self.world_width / 2.0, self.visible_world_height() / 2.0)
    }

    /// Screen rectangle `[0, width] x [0, height]` used for visibility tests
    pub fn screen_bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    pub fn to_screen_x(&self, x: f64) -> f64 {
        (self.scale() * x).round() + self.padding
    }

    pub fn to_screen_y(&self, y: f64) -> f64 {
        self.canvas_height - self.padding - (self.scale() * y).round()
    }

    pub fn to_world_x(&self, x: f64) -> f64 {
        (x - self.padding) / self.scale()
    }

    pub fn to_world_y(&self, y: f64) -> f64 {
        (self.canvas_height - self.padding - y) / self.scale()
    }

    pub fn to_screen(&self, point: Point) -> Vector2 {
        Vector2::new(self.to_screen_x(point.x), self.to_screen_y(point.y))
    }

    pub fn to_world(&self, screen: Vector2) -> Point {
        Point::new(self.to_world_x(screen.x), self.to_world_y(screen.y))
    }
}
