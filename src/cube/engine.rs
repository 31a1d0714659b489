//! The rotation engine: executing a single face move.
//!
//! A move rotates the pivot face and drags the adjacent ring of edge cells on
//! its four neighbours. The engine works in a front-centric frame: a role
//! table maps each local role (front/up/down/left/right/back) to the identity
//! of the face currently playing it, and every grid mutation goes through
//! that indirection straight into the face's identity slot. Nothing is copied
//! out and written back, so face objects stay slot-stable.
//!
//! Faces that are not naturally indexed the way the front-centric ring cycle
//! expects are rotated into alignment first and rotated back afterwards.

use log::trace;

use crate::core::{CubeError, CubeMove, FaceSide, Rotation};
use crate::face::CubeFace;

use super::Cube;

/// The role table for one move: which face identity plays each local role
/// while the pivot is treated as the front.
#[derive(Clone, Copy, Debug)]
struct RoleTable {
    front: FaceSide,
    up: FaceSide,
    down: FaceSide,
    left: FaceSide,
    right: FaceSide,
}

impl RoleTable {
    fn for_pivot(pivot: FaceSide) -> Self {
        Self {
            front: pivot,
            up: pivot.up_of(),
            down: pivot.down_of(),
            left: pivot.left_of(),
            right: pivot.right_of(),
        }
    }
}

impl Cube {
    /// Execute a single move given as side and rotation.
    pub fn execute_move(&mut self, side: FaceSide, rotation: Rotation) -> Result<(), CubeError> {
        self.execute(CubeMove::new(side, rotation))
    }

    /// Execute a single move: rotate the pivot face 90° and cycle the
    /// boundary ring across its four neighbours.
    ///
    /// Appends the move to the history and recomputes the solved flag. Not
    /// gated by the mixing/solving state machine — scrambles and solves are
    /// themselves sequences of `execute` calls.
    pub fn execute(&mut self, mv: CubeMove) -> Result<(), CubeError> {
        trace!("executing {}", mv.notation().trim());

        let roles = RoleTable::for_pivot(mv.side());

        self.align_to_front_frame(roles, false);
        self.face_mut(roles.front)
            .rotate_90(mv.rotation().is_clockwise());
        self.cycle_ring(roles, mv.rotation())?;
        self.align_to_front_frame(roles, true);

        self.move_history.push(mv);
        self.solved = self.faces == self.reference;
        Ok(())
    }

    fn face_mut(&mut self, side: FaceSide) -> &mut CubeFace {
        &mut self.faces[side.index()]
    }

    /// Rotate the role faces whose natural indexing does not match the
    /// front-centric frame the ring cycle assumes; `undo` applies the exact
    /// inverse to restore their absolute orientation.
    ///
    /// Only the up/down roles need correcting for side pivots; the Up/Down
    /// pivots additionally correct their left/right roles and the face
    /// opposite the frame (which plays the up/down role for them).
    fn align_to_front_frame(&mut self, roles: RoleTable, undo: bool) {
        let cw = |clockwise: bool| clockwise != undo;
        match roles.front {
            FaceSide::Front => {}
            FaceSide::Left => {
                self.face_mut(roles.up).rotate_90(cw(false));
                self.face_mut(roles.down).rotate_90(cw(true));
            }
            FaceSide::Right => {
                self.face_mut(roles.up).rotate_90(cw(true));
                self.face_mut(roles.down).rotate_90(cw(false));
            }
            FaceSide::Back => {
                self.face_mut(roles.up).rotate_180();
                self.face_mut(roles.down).rotate_180();
            }
            FaceSide::Up => {
                self.face_mut(roles.right).rotate_90(cw(false));
                self.face_mut(roles.left).rotate_90(cw(true));
                self.face_mut(roles.up).rotate_180();
            }
            FaceSide::Down => {
                self.face_mut(roles.right).rotate_90(cw(true));
                self.face_mut(roles.left).rotate_90(cw(false));
                self.face_mut(roles.down).rotate_180();
            }
        }
    }

    /// Cycle the boundary ring: up's last row, left's last column, down's
    /// first row, right's first column.
    ///
    /// The four writes form a cycle, so the original up-row is snapshotted
    /// before any write. Strip traversal direction is carried by the
    /// `clockwise` flag of `set_row`/`set_column`.
    fn cycle_ring(&mut self, roles: RoleTable, rotation: Rotation) -> Result<(), CubeError> {
        let last = self.size() - 1;

        match rotation {
            Rotation::Clockwise => {
                let saved_up_row = self.face(roles.up).row(last);

                let strip = self.face(roles.left).column(last);
                self.face_mut(roles.up).set_row(last, &strip, true)?;

                let strip = self.face(roles.down).row(0);
                self.face_mut(roles.left).set_column(last, &strip, true)?;

                let strip = self.face(roles.right).column(0);
                self.face_mut(roles.down).set_row(0, &strip, true)?;

                self.face_mut(roles.right)
                    .set_column(0, &saved_up_row, true)?;
            }
            Rotation::CounterClockwise => {
                let saved_up_row = self.face(roles.up).row(last);

                let strip = self.face(roles.right).column(0);
                self.face_mut(roles.up).set_row(last, &strip, false)?;

                let strip = self.face(roles.down).row(0);
                self.face_mut(roles.right).set_column(0, &strip, false)?;

                let strip = self.face(roles.left).column(last);
                self.face_mut(roles.down).set_row(0, &strip, false)?;

                self.face_mut(roles.left)
                    .set_column(last, &saved_up_row, false)?;
            }
        }
        Ok(())
    }
}
