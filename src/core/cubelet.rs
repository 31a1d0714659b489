//! The smallest coloured unit of a face grid.

use serde::{Deserialize, Serialize};

use super::colour::CubeletColour;

/// An immutable coloured unit cell.
///
/// The original position is display metadata recorded at construction and
/// carried along as the cubelet travels between faces; it plays no part in
/// equality. Two cubelets of the same colour are interchangeable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cubelet {
    colour: CubeletColour,
    origin: Option<(String, String)>,
}

impl Cubelet {
    /// Create a cubelet with its original `(row, column)` position.
    #[must_use]
    pub fn new(colour: CubeletColour, position: (usize, usize)) -> Self {
        Self {
            colour,
            origin: Some((position.0.to_string(), position.1.to_string())),
        }
    }

    /// Create a cubelet without position metadata.
    #[must_use]
    pub fn plain(colour: CubeletColour) -> Self {
        Self {
            colour,
            origin: None,
        }
    }

    /// The cubelet's colour.
    #[must_use]
    pub fn colour(&self) -> CubeletColour {
        self.colour
    }

    /// Original `(row, column)` position as display strings, if recorded.
    #[must_use]
    pub fn origin(&self) -> Option<(&str, &str)> {
        self.origin
            .as_ref()
            .map(|(row, col)| (row.as_str(), col.as_str()))
    }

    /// Green cubelet at the given original position.
    #[must_use]
    pub fn green(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::Green, position)
    }

    /// Blue cubelet at the given original position.
    #[must_use]
    pub fn blue(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::Blue, position)
    }

    /// Red cubelet at the given original position.
    #[must_use]
    pub fn red(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::Red, position)
    }

    /// Orange cubelet at the given original position.
    #[must_use]
    pub fn orange(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::Orange, position)
    }

    /// White cubelet at the given original position.
    #[must_use]
    pub fn white(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::White, position)
    }

    /// Yellow cubelet at the given original position.
    #[must_use]
    pub fn yellow(position: (usize, usize)) -> Self {
        Self::new(CubeletColour::Yellow, position)
    }
}

impl PartialEq for Cubelet {
    fn eq(&self, other: &Self) -> bool {
        self.colour == other.colour
    }
}

impl Eq for Cubelet {}

impl std::hash::Hash for Cubelet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.colour.hash(state);
    }
}
