//! A single face of the cube: an N×N grid of cubelets with the row, column,
//! and rotation primitives the rotation engine is built from.
//!
//! A face's identity is fixed at construction and never changes; moves only
//! overwrite cell contents in place. During a move a face may temporarily
//! play a different local role (the left face acting as "up", say), but that
//! is the engine's bookkeeping, not the face's.

use smallvec::SmallVec;

use crate::core::{CubeError, Cubelet, CubeletColour, FaceSide};

/// A row or column of cubelets. Faces are at most 3×3, so strips never touch
/// the heap.
pub type Strip = SmallVec<[Cubelet; 3]>;

/// One of the six square grids forming the cube's surface.
///
/// Equality compares identity, size, and every cell pairwise (cubelets
/// compare by colour only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeFace {
    identity: FaceSide,
    size: usize,
    cells: Vec<Vec<Cubelet>>,
}

impl CubeFace {
    /// Create a face filled with a single colour, each cubelet recording its
    /// starting position.
    #[must_use]
    pub fn new(identity: FaceSide, colour: CubeletColour, size: usize) -> Self {
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| Cubelet::new(colour, (row, col)))
                    .collect()
            })
            .collect();
        Self {
            identity,
            size,
            cells,
        }
    }

    /// Create a face from an explicit cell grid.
    ///
    /// The grid must be square; this is a construction aid for tests and
    /// rendering layers, not something the engine does after start-up.
    #[must_use]
    pub fn from_cells(identity: FaceSide, cells: Vec<Vec<Cubelet>>) -> Self {
        let size = cells.len();
        debug_assert!(cells.iter().all(|row| row.len() == size));
        Self {
            identity,
            size,
            cells,
        }
    }

    /// The face's permanent identity slot.
    #[must_use]
    pub fn identity(&self) -> FaceSide {
        self.identity
    }

    /// The face size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The full cell grid, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Vec<Cubelet>] {
        &self.cells
    }

    /// The colour at `(row, col)`.
    #[must_use]
    pub fn colour_at(&self, row: usize, col: usize) -> CubeletColour {
        self.cells[row][col].colour()
    }

    /// Copy of row `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> Strip {
        self.cells[row].iter().cloned().collect()
    }

    /// Copy of column `col`.
    #[must_use]
    pub fn column(&self, col: usize) -> Strip {
        self.cells.iter().map(|row| row[col].clone()).collect()
    }

    /// Overwrite row `row` from a strip of exactly N cells.
    ///
    /// With `clockwise` the strip is written in reverse index order
    /// (`strip[N-1-k]` lands in column `k`), counter-clockwise in natural
    /// order. A row sourced from a perpendicular column needs the reversed
    /// traversal to keep physical adjacency when the edge is transplanted.
    pub fn set_row(&mut self, row: usize, strip: &[Cubelet], clockwise: bool) -> Result<(), CubeError> {
        self.check_strip(strip)?;
        for col in 0..self.size {
            let source = if clockwise { self.size - 1 - col } else { col };
            self.cells[row][col] = strip[source].clone();
        }
        Ok(())
    }

    /// Overwrite column `col` from a strip of exactly N cells.
    ///
    /// Traversal direction is the mirror of [`CubeFace::set_row`]: natural
    /// order for `clockwise`, reversed otherwise.
    pub fn set_column(
        &mut self,
        col: usize,
        strip: &[Cubelet],
        clockwise: bool,
    ) -> Result<(), CubeError> {
        self.check_strip(strip)?;
        for row in 0..self.size {
            let source = if clockwise { row } else { self.size - 1 - row };
            self.cells[row][col] = strip[source].clone();
        }
        Ok(())
    }

    /// Rotate the grid 90° in place.
    ///
    /// Layer-by-layer four-way cyclic swap: O(1) extra space per swap, each
    /// cell visited exactly once. A 1×1 grid is a no-op.
    pub fn rotate_90(&mut self, clockwise: bool) {
        let n = self.size;
        for layer in 0..n / 2 {
            let last = n - 1 - layer;
            for i in layer..last {
                let offset = i - layer;
                let top = self.cells[layer][i].clone();
                if clockwise {
                    self.cells[layer][i] = self.cells[last - offset][layer].clone();
                    self.cells[last - offset][layer] = self.cells[last][last - offset].clone();
                    self.cells[last][last - offset] = self.cells[i][last].clone();
                    self.cells[i][last] = top;
                } else {
                    self.cells[layer][i] = self.cells[i][last].clone();
                    self.cells[i][last] = self.cells[last][last - offset].clone();
                    self.cells[last][last - offset] = self.cells[last - offset][layer].clone();
                    self.cells[last - offset][layer] = top;
                }
            }
        }
    }

    /// Rotate the grid 180°: every cell `(i, j)` moves to `(N-1-i, N-1-j)`.
    pub fn rotate_180(&mut self) {
        let n = self.size;
        let copy = self.cells.clone();
        for (i, row) in copy.into_iter().enumerate() {
            for (j, cell) in row.into_iter().enumerate() {
                self.cells[n - 1 - i][n - 1 - j] = cell;
            }
        }
    }

    fn check_strip(&self, strip: &[Cubelet]) -> Result<(), CubeError> {
        if strip.len() != self.size {
            return Err(CubeError::StripLength {
                expected: self.size,
                got: strip.len(),
            });
        }
        Ok(())
    }
}
