pub mod math;
pub mod core;
pub mod bodies;
pub mod forces;
pub mod collision;
pub mod render;
pub mod driver;

/// Re-export common types for easier usage
pub use crate::core::{Scene, SceneConfig, SceneObject, ForceMode, GravityLaw, Viewport};
pub use crate::bodies::{Ball, BallOptions, ObjectFlags};
pub use crate::math::{Vector2, Point, Circle};
pub use crate::render::{Canvas, Color, RecordingCanvas};
pub use crate::driver::{FrameDriver, StopHandle};

/// Error types for the sandbox
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum SandboxError {
        #[error("Object not found: {0}")]
        ObjectNotFound(String),

        #[error("Object is not a body: {0}")]
        NotABody(String),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Placement failed after {attempts} attempt(s)")]
        PlacementFailed { attempts: u32 },
    }
}

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, error::SandboxError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
