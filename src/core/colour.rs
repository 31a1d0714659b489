//! Cubelet colours.

use serde::{Deserialize, Serialize};

/// One of the six fixed cubelet colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeletColour {
    Green,
    Blue,
    Red,
    Orange,
    White,
    Yellow,
}

impl CubeletColour {
    /// All colours, in declaration order.
    pub const ALL: [CubeletColour; 6] = [
        CubeletColour::Green,
        CubeletColour::Blue,
        CubeletColour::Red,
        CubeletColour::Orange,
        CubeletColour::White,
        CubeletColour::Yellow,
    ];

    /// One-letter display tag. Rendering layers map this to glyphs/colors.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            CubeletColour::Green => "G",
            CubeletColour::Blue => "B",
            CubeletColour::Red => "R",
            CubeletColour::Orange => "O",
            CubeletColour::White => "W",
            CubeletColour::Yellow => "Y",
        }
    }
}

impl std::fmt::Display for CubeletColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}
