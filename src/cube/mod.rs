//! The cube aggregate: six identity-stable faces, the move history, the
//! solved flag, and the mixing/solving exclusivity state machine.
//!
//! The rotation engine itself lives in [`engine`]; this module owns
//! construction, read-only inspection, and the two orchestrated operations
//! (`mix_up`, `solve`).

mod engine;

use std::sync::Arc;

use log::debug;

use crate::core::{CubeError, CubeMove, CubeRng, CubeSettings, FaceSide};
use crate::face::CubeFace;
use crate::solver::{CubeSolver, MoveHook};

/// What the cube is currently busy with. Mixing and solving are mutually
/// exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Activity {
    Idle,
    Mixing,
    Solving,
}

/// An N×N×N twisty cube.
///
/// Faces are created once at construction and never replaced as objects;
/// moves overwrite their cell contents in place, so face references obtained
/// through [`Cube::face`] stay slot-stable for the cube's lifetime. The move
/// history grows monotonically and is never truncated — the solver's
/// corrective moves are recorded like any other.
pub struct Cube {
    settings: CubeSettings,
    faces: [CubeFace; 6],
    /// Pristine copy of the faces at construction; `solved` is recomputed by
    /// comparing against this instead of building a fresh cube per move.
    reference: [CubeFace; 6],
    move_history: Vec<CubeMove>,
    solved: bool,
    activity: Activity,
    solver: Arc<dyn CubeSolver>,
    rng: CubeRng,
}

impl Cube {
    /// Create a cube with an entropy-seeded scramble generator.
    #[must_use]
    pub fn new(solver: Arc<dyn CubeSolver>, settings: CubeSettings) -> Self {
        Self::seeded_with(solver, settings, CubeRng::from_entropy())
    }

    /// Create a cube whose scrambles are reproducible from `seed`.
    #[must_use]
    pub fn seeded(solver: Arc<dyn CubeSolver>, settings: CubeSettings, seed: u64) -> Self {
        Self::seeded_with(solver, settings, CubeRng::new(seed))
    }

    /// Create a default (size-3, canonical colours) cube.
    #[must_use]
    pub fn with_defaults(solver: Arc<dyn CubeSolver>) -> Self {
        Self::new(solver, CubeSettings::default())
    }

    fn seeded_with(solver: Arc<dyn CubeSolver>, settings: CubeSettings, rng: CubeRng) -> Self {
        let faces = FaceSide::ALL
            .map(|side| CubeFace::new(side, settings.colour_of(side), settings.size()));
        let reference = faces.clone();
        Self {
            settings,
            faces,
            reference,
            move_history: Vec::new(),
            solved: true,
            activity: Activity::Idle,
            solver,
            rng,
        }
    }

    /// The cube size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.settings.size()
    }

    /// The settings this cube was built from.
    #[must_use]
    pub fn settings(&self) -> &CubeSettings {
        &self.settings
    }

    /// All six faces, in [`FaceSide::index`] slot order.
    #[must_use]
    pub fn faces(&self) -> &[CubeFace; 6] {
        &self.faces
    }

    /// The face with the given identity.
    #[must_use]
    pub fn face(&self, side: FaceSide) -> &CubeFace {
        &self.faces[side.index()]
    }

    /// Every move executed so far, in execution order. Append-only.
    #[must_use]
    pub fn move_history(&self) -> &[CubeMove] {
        &self.move_history
    }

    /// Whether all six faces currently match a freshly constructed cube of
    /// the same settings.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Whether a scramble sequence is in flight.
    #[must_use]
    pub fn mixing(&self) -> bool {
        self.activity == Activity::Mixing
    }

    /// Whether a solve is in flight.
    #[must_use]
    pub fn solving(&self) -> bool {
        self.activity == Activity::Solving
    }

    /// The seed driving scramble move selection.
    #[must_use]
    pub fn scramble_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Scramble with `count` uniformly random moves, invoking `on_move` after
    /// each one.
    ///
    /// Declined as a silent no-op while a scramble or solve is already in
    /// flight: no moves are performed and no error is raised. Callers that
    /// need to distinguish the two cases should poll [`Cube::mixing`] /
    /// [`Cube::solving`] first.
    pub fn mix_up(
        &mut self,
        count: usize,
        mut on_move: Option<MoveHook<'_>>,
    ) -> Result<(), CubeError> {
        if self.activity != Activity::Idle {
            debug!("mix-up of {count} moves declined, cube is busy");
            return Ok(());
        }

        debug!("mixing up with {count} random moves");
        self.activity = Activity::Mixing;
        let result = self.run_scramble(count, &mut on_move);
        self.activity = Activity::Idle;
        result
    }

    fn run_scramble(
        &mut self,
        count: usize,
        on_move: &mut Option<MoveHook<'_>>,
    ) -> Result<(), CubeError> {
        for _ in 0..count {
            let mv = self.rng.next_move();
            self.execute(mv)?;
            if let Some(hook) = on_move.as_mut() {
                hook(&mv);
            }
        }
        Ok(())
    }

    /// Run the configured solver, returning the final solved status.
    ///
    /// Declined as a silent no-op while a scramble or solve is already in
    /// flight; the current solved status is returned unchanged in that case.
    pub fn solve(&mut self, on_move: Option<MoveHook<'_>>) -> Result<bool, CubeError> {
        if self.activity != Activity::Idle {
            debug!("solve declined, cube is busy");
            return Ok(self.solved);
        }

        debug!("solving via configured solver strategy");
        self.activity = Activity::Solving;
        let solver = Arc::clone(&self.solver);
        let result = solver.solve(self, on_move);
        self.activity = Activity::Idle;
        result
    }
}

impl std::fmt::Debug for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cube")
            .field("size", &self.size())
            .field("moves", &self.move_history.len())
            .field("solved", &self.solved)
            .field("activity", &self.activity)
            .finish_non_exhaustive()
    }
}
