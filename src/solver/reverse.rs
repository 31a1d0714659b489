//! Reference solver: undo the move history.

use log::debug;

use super::{CubeSolver, MoveHook};
use crate::core::CubeError;
use crate::cube::Cube;

/// Solves by replaying the cube's move history backwards, one inverse move at
/// a time.
///
/// Correct because every executed move is recorded in history in execution
/// order, and the geometric inverse of `(side, rotation)` is exactly
/// `(side, rotation.opposite())` — an invariant the rotation engine upholds.
/// The solver's own corrective moves are appended to history like any other
/// move; only the entries that existed on entry are walked.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseMoveHistorySolver;

impl ReverseMoveHistorySolver {
    /// Create the solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CubeSolver for ReverseMoveHistorySolver {
    fn solve(
        &self,
        cube: &mut Cube,
        mut on_move: Option<MoveHook<'_>>,
    ) -> Result<bool, CubeError> {
        let recorded = cube.move_history().len();
        debug!("reverse-history solve over {recorded} recorded moves");

        for index in (0..recorded).rev() {
            if cube.solved() {
                break;
            }

            let inverse = cube.move_history()[index].inverse();
            cube.execute(inverse)?;
            if let Some(hook) = on_move.as_mut() {
                hook(&inverse);
            }
        }

        Ok(cube.solved())
    }
}
