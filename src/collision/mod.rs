mod elastic;
mod walls;

pub use self::elastic::{resolve_elastic, momentum, kinetic_energy, Impactor};
pub use self::walls::{bounce_off_walls, WallContact};
