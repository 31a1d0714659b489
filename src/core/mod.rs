//! Core value types: colours, sides, rotations, cubelets, moves, settings,
//! RNG, errors.
//!
//! Everything here is a small immutable value; the mutable aggregate lives in
//! [`crate::cube`].

pub mod colour;
pub mod cubelet;
pub mod error;
pub mod moves;
pub mod rng;
pub mod rotation;
pub mod settings;
pub mod side;

pub use colour::CubeletColour;
pub use cubelet::Cubelet;
pub use error::CubeError;
pub use moves::{CubeMove, ParseMoveError};
pub use rng::CubeRng;
pub use rotation::Rotation;
pub use settings::{CubeSettings, MAX_SIZE, MIN_SIZE};
pub use side::FaceSide;
