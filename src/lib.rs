//! # twisty
//!
//! An N×N×N (N ∈ 1..=3) twisty cube engine: face/cubelet state, a rotation
//! engine that executes face moves, and pluggable solver strategies with
//! paced scramble/solve orchestration.
//!
//! ## Design Principles
//!
//! 1. **Identity-stable faces**: the six faces are created once and never
//!    replaced as objects; moves overwrite cell contents in place, so
//!    collaborators can rely on face-level identity.
//!
//! 2. **Front-centric rotation engine**: every move is computed in a frame
//!    where the pivot face is the local front, via a static role table;
//!    misaligned neighbours are rotated into the frame and back out.
//!
//! 3. **Strategy over algorithm**: the cube orchestrates exclusivity and
//!    callback pacing but delegates *how* to solve to a [`CubeSolver`].
//!
//! 4. **Reproducible randomness**: scrambles draw from an explicit seedable
//!    RNG, never ambient process randomness.
//!
//! ## Modules
//!
//! - `core`: colours, sides, rotations, cubelets, moves, settings, RNG, errors
//! - `face`: the N×N face grid and its row/column/rotation primitives
//! - `cube`: the aggregate state machine and the rotation engine
//! - `solver`: the solver strategy trait and the reverse-history reference
//!   implementation

pub mod core;
pub mod cube;
pub mod face;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    CubeError, CubeMove, CubeRng, CubeSettings, Cubelet, CubeletColour, FaceSide, ParseMoveError,
    Rotation, MAX_SIZE, MIN_SIZE,
};
pub use crate::cube::Cube;
pub use crate::face::{CubeFace, Strip};
pub use crate::solver::{CubeSolver, MoveHook, ReverseMoveHistorySolver};
