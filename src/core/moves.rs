//! Move representation and short notation.

use serde::{Deserialize, Serialize};

use super::rotation::Rotation;
use super::side::FaceSide;

/// A single face move: which side to turn, and in which direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeMove {
    side: FaceSide,
    rotation: Rotation,
}

impl CubeMove {
    /// Create a move.
    #[must_use]
    pub const fn new(side: FaceSide, rotation: Rotation) -> Self {
        Self { side, rotation }
    }

    /// The side this move turns.
    #[must_use]
    pub const fn side(self) -> FaceSide {
        self.side
    }

    /// The turn direction.
    #[must_use]
    pub const fn rotation(self) -> Rotation {
        self.rotation
    }

    /// The move that exactly undoes this one: same side, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            side: self.side,
            rotation: self.rotation.opposite(),
        }
    }

    /// Space-padded short notation: `" F "` for clockwise, `" F' "` for
    /// counter-clockwise.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match (self.side, self.rotation) {
            (FaceSide::Front, Rotation::Clockwise) => " F ",
            (FaceSide::Front, Rotation::CounterClockwise) => " F' ",
            (FaceSide::Right, Rotation::Clockwise) => " R ",
            (FaceSide::Right, Rotation::CounterClockwise) => " R' ",
            (FaceSide::Back, Rotation::Clockwise) => " B ",
            (FaceSide::Back, Rotation::CounterClockwise) => " B' ",
            (FaceSide::Left, Rotation::Clockwise) => " L ",
            (FaceSide::Left, Rotation::CounterClockwise) => " L' ",
            (FaceSide::Up, Rotation::Clockwise) => " U ",
            (FaceSide::Up, Rotation::CounterClockwise) => " U' ",
            (FaceSide::Down, Rotation::Clockwise) => " D ",
            (FaceSide::Down, Rotation::CounterClockwise) => " D' ",
        }
    }
}

impl std::fmt::Display for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

/// Error produced when parsing move notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised move notation {0:?}")]
pub struct ParseMoveError(pub String);

impl std::str::FromStr for CubeMove {
    type Err = ParseMoveError;

    /// Parse trimmed short notation: a face letter optionally followed by
    /// `'` for counter-clockwise (`"F"`, `"R'"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (letter, rotation) = match trimmed.strip_suffix('\'') {
            Some(rest) => (rest, Rotation::CounterClockwise),
            None => (trimmed, Rotation::Clockwise),
        };

        let side = FaceSide::ALL
            .into_iter()
            .find(|side| side.letter() == letter)
            .ok_or_else(|| ParseMoveError(s.to_string()))?;

        Ok(CubeMove::new(side, rotation))
    }
}
