//! Face identities and the fixed adjacency table.
//!
//! Adjacency is defined relative to treating a face as the front: for a face
//! `F`, `F.up_of()` names the face that plays the "up" role when `F` is the
//! pivot of a move. The table is a static lookup, not computed geometry.
//! `Up` and `Down` have their neighbour-of relationships defined directly
//! rather than via front-relative lookup.

use serde::{Deserialize, Serialize};

/// One of the six logical face identities of a cube.
///
/// A face's identity is its permanent slot key in the cube; it never changes,
/// no matter which local role (front/up/left/...) the face plays during a
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceSide {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl FaceSide {
    /// All six sides, in slot order.
    pub const ALL: [FaceSide; 6] = [
        FaceSide::Front,
        FaceSide::Right,
        FaceSide::Back,
        FaceSide::Left,
        FaceSide::Up,
        FaceSide::Down,
    ];

    /// Slot index of this side in a cube's face array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            FaceSide::Front => 0,
            FaceSide::Right => 1,
            FaceSide::Back => 2,
            FaceSide::Left => 3,
            FaceSide::Up => 4,
            FaceSide::Down => 5,
        }
    }

    /// One-letter face code used in move notation.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            FaceSide::Front => "F",
            FaceSide::Right => "R",
            FaceSide::Back => "B",
            FaceSide::Left => "L",
            FaceSide::Up => "U",
            FaceSide::Down => "D",
        }
    }

    /// The face behind this one when this face is treated as the front.
    #[must_use]
    pub const fn back_of(self) -> FaceSide {
        match self {
            FaceSide::Front => FaceSide::Back,
            FaceSide::Right => FaceSide::Left,
            FaceSide::Back => FaceSide::Front,
            FaceSide::Left => FaceSide::Right,
            FaceSide::Up => FaceSide::Down,
            FaceSide::Down => FaceSide::Up,
        }
    }

    /// The face to the right when this face is treated as the front.
    #[must_use]
    pub const fn right_of(self) -> FaceSide {
        match self {
            FaceSide::Front => FaceSide::Right,
            FaceSide::Right => FaceSide::Back,
            FaceSide::Back => FaceSide::Left,
            FaceSide::Left => FaceSide::Front,
            FaceSide::Up | FaceSide::Down => FaceSide::Right,
        }
    }

    /// The face to the left when this face is treated as the front.
    #[must_use]
    pub const fn left_of(self) -> FaceSide {
        match self {
            FaceSide::Front => FaceSide::Left,
            FaceSide::Right => FaceSide::Front,
            FaceSide::Back => FaceSide::Right,
            FaceSide::Left => FaceSide::Back,
            FaceSide::Up | FaceSide::Down => FaceSide::Left,
        }
    }

    /// The face above when this face is treated as the front.
    #[must_use]
    pub const fn up_of(self) -> FaceSide {
        match self {
            FaceSide::Up => FaceSide::Back,
            FaceSide::Down => FaceSide::Front,
            _ => FaceSide::Up,
        }
    }

    /// The face below when this face is treated as the front.
    #[must_use]
    pub const fn down_of(self) -> FaceSide {
        match self {
            FaceSide::Up => FaceSide::Front,
            FaceSide::Down => FaceSide::Back,
            _ => FaceSide::Down,
        }
    }
}

impl std::fmt::Display for FaceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FaceSide::Front => "Front",
            FaceSide::Right => "Right",
            FaceSide::Back => "Back",
            FaceSide::Left => "Left",
            FaceSide::Up => "Up",
            FaceSide::Down => "Down",
        };
        f.write_str(name)
    }
}
