//! Stock post-step hooks.

use tracing::trace;

use crate::core::{ForceMode, PostStepHook, Scene};

/// Keeps the anchor pinned to the world center in space mode, panning every
/// other object (and its trail) along with it
pub fn lock_anchor() -> PostStepHook {
    Box::new(|scene: &mut Scene| {
        if scene.config().mode == ForceMode::SpaceGravity {
            scene.recenter_on_anchor();
        }
    })
}

/// Keeps the named object pinned to the world center; idle while the object
/// is absent
pub fn follow(name: impl Into<String>) -> PostStepHook {
    let name = name.into();
    Box::new(move |scene: &mut Scene| {
        if let Err(err) = scene.recenter_on(&name) {
            trace!(%err, "follow target missing");
        }
    })
}
