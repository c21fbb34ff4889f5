pub mod config;
pub mod viewport;
pub mod storage;
pub mod events;
pub mod object;
pub mod scene;
pub mod placement;
pub mod hooks;

pub use self::config::SceneConfig;
pub use self::viewport::Viewport;
pub use self::storage::{ObjectStorage, Neighbors, NeighborsMut};
pub use self::events::{EventQueue, CollisionEvent, CollisionKind, ObjectEvent, ObjectEventKind, SoundCue};
pub use self::object::{SceneObject, SceneContext, ObjectState, Trail, CollisionOutcome};
pub use self::scene::{Scene, PostStepHook};
pub use self::placement::{SpawnOptions, ANCHOR_NAME};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The force regime the scene simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ForceMode {
    /// Constant downward pull; bodies bounce off the walls and the ground
    #[default]
    SurfaceGravity,

    /// Bodies attract each other; the anchor swallows whatever touches it
    SpaceGravity,
}

/// How the pairwise attraction in space mode falls off with distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GravityLaw {
    /// `G * m1 * m2 / d`
    #[default]
    Inverse,

    /// `G * m1 * m2`, independent of distance
    Constant,

    /// `G * m1 * m2 / d^2`, Newtonian
    InverseSquare,
}
