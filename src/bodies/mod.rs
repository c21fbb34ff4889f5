mod ball;

pub use self::ball::{Ball, BallOptions};
pub use self::object_flags::ObjectFlags;

/// Flags for controlling object behavior
pub mod object_flags {
    use bitflags::bitflags;

    #[cfg(feature = "serialize")]
    use serde::{Serialize, Deserialize};

    bitflags! {
        /// Roles and options of a scene object
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
        pub struct ObjectFlags: u32 {
            /// Object records its past positions as a trail
            const TRACE = 0x01;

            /// The massive anchor body: never starts a collision check, is
            /// never absorbed, is the re-centering target and glows when drawn
            const ANCHOR = 0x02;
        }
    }
}
