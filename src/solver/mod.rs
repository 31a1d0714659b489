//! Solver strategy seam.
//!
//! The cube does not know how to solve itself; it delegates to whatever
//! [`CubeSolver`] it was constructed with. The engine only orchestrates
//! exclusivity (no solving while a scramble is in flight) and callback
//! plumbing.

mod reverse;

pub use reverse::ReverseMoveHistorySolver;

use crate::core::{CubeError, CubeMove};
use crate::cube::Cube;

/// Pacing callback invoked after each executed move.
///
/// The orchestration loop does not issue the next move until the callback
/// returns, which gives callers (animations, delays) a strict one-move-at-a-
/// time suspension point.
pub type MoveHook<'a> = &'a mut dyn FnMut(&CubeMove);

/// A pluggable solving strategy.
///
/// Implementations may call [`Cube::execute`] any number of times and must
/// invoke the hook (when given) after each move, letting it return before
/// issuing the next move. The return value is the cube's final solved
/// status.
pub trait CubeSolver {
    /// Drive the cube towards the solved state.
    fn solve(&self, cube: &mut Cube, on_move: Option<MoveHook<'_>>) -> Result<bool, CubeError>;
}
