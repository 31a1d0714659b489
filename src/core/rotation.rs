//! Rotation directions.

use serde::{Deserialize, Serialize};

/// Direction of a quarter turn, as seen looking at the rotated face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Both directions.
    pub const ALL: [Rotation; 2] = [Rotation::Clockwise, Rotation::CounterClockwise];

    /// The inverse direction.
    ///
    /// The geometric inverse of a move `(side, rotation)` is exactly
    /// `(side, rotation.opposite())`; the reverse-history solver depends on
    /// this.
    #[must_use]
    pub const fn opposite(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// True for [`Rotation::Clockwise`].
    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Rotation::Clockwise)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rotation::Clockwise => "Clockwise",
            Rotation::CounterClockwise => "Counter-clockwise",
        };
        f.write_str(name)
    }
}
