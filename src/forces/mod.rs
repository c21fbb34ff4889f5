mod gravity;

pub use self::gravity::{apply_surface_gravity, mutual_acceleration, Attractor};
