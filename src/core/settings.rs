//! Validated cube construction parameters.

use serde::{Deserialize, Serialize};

use super::colour::CubeletColour;
use super::error::CubeError;
use super::side::FaceSide;

/// Smallest supported cube size.
pub const MIN_SIZE: usize = 1;
/// Largest supported cube size.
pub const MAX_SIZE: usize = 3;

/// Construction parameters: cube size and the colour of each face.
///
/// Constructed once and immutable afterwards. Sizes outside `1..=3` are
/// rejected up front; no cube is ever created from invalid settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSettings {
    size: usize,
    colours: [CubeletColour; 6],
}

/// Canonical colour assignment, indexed by [`FaceSide::index`].
const CANONICAL_COLOURS: [CubeletColour; 6] = [
    CubeletColour::Green,  // Front
    CubeletColour::Red,    // Right
    CubeletColour::Blue,   // Back
    CubeletColour::Orange, // Left
    CubeletColour::White,  // Up
    CubeletColour::Yellow, // Down
];

impl CubeSettings {
    /// Create settings with the canonical colour assignment.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(CubeError::UnsupportedSize(size));
        }
        Ok(Self {
            size,
            colours: CANONICAL_COLOURS,
        })
    }

    /// Create settings with an explicit colour per face, in
    /// [`FaceSide::ALL`] order.
    pub fn with_colours(size: usize, colours: [CubeletColour; 6]) -> Result<Self, CubeError> {
        let mut settings = Self::new(size)?;
        settings.colours = colours;
        Ok(settings)
    }

    /// Override the colour of a single face.
    #[must_use]
    pub fn with_face_colour(mut self, side: FaceSide, colour: CubeletColour) -> Self {
        self.colours[side.index()] = colour;
        self
    }

    /// The cube size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The colour assigned to a face.
    #[must_use]
    pub fn colour_of(&self, side: FaceSide) -> CubeletColour {
        self.colours[side.index()]
    }
}

impl Default for CubeSettings {
    /// Size-3 cube with the canonical colours (Front=Green, Right=Red,
    /// Back=Blue, Left=Orange, Up=White, Down=Yellow).
    fn default() -> Self {
        Self {
            size: 3,
            colours: CANONICAL_COLOURS,
        }
    }
}
