//! Error taxonomy for cube construction and face mutation.
//!
//! There are only two structural failure modes in the engine:
//!
//! - A cube size outside the supported range, rejected at settings
//!   construction before any cube exists.
//! - A row/column strip of the wrong length handed to a face, which the
//!   rotation engine never produces and therefore indicates a programming
//!   defect in the caller.
//!
//! Neither is recoverable; both propagate as hard `Err` values. The engine
//! has no retry paths anywhere.

use thiserror::Error;

use super::settings::{MAX_SIZE, MIN_SIZE};

/// Errors produced by cube construction and face-grid mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Cube size outside the supported inclusive range.
    #[error("cube size can only be {MIN_SIZE} to {MAX_SIZE}, got {0}")]
    UnsupportedSize(usize),

    /// A row/column strip whose length does not match the face size.
    #[error("strip has {got} cubelets, face requires exactly {expected}")]
    StripLength {
        /// The owning face's size.
        expected: usize,
        /// The length of the strip that was supplied.
        got: usize,
    },
}
