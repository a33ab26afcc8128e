//! Grid generator: `rows × cols` pieces whose shared edges always interlock.
//!
//! Model
//! - Decide every interior edge once in an [`EdgeMap`], then materialise the
//!   pieces row-major. Top and left edges are inherited (inverted) from the
//!   already-built neighbours above and to the left; right and bottom edges
//!   come from the map. No piece ever consults a throw-away lookahead
//!   neighbour, so a later cell cannot disagree with an earlier one.
//! - A neighbour lookup outside the grid means "no neighbour": the side is a
//!   straight border edge.
//! - Determinism: `ReplayToken { seed, index }` keys a single `StdRng`.

mod edges;

pub use edges::EdgeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::piece::{PuzzlePiece, Side};

/// Grid size in pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridDims {
    fn default() -> Self {
        Self { rows: 3, cols: 5 }
    }
}

impl GridDims {
    /// Largest piece count [`GridDims::validate`] accepts.
    pub const MAX_PIECES: usize = 1 << 20;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of pieces; saturates for sizes that fail [`GridDims::validate`].
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Reject sizes whose piece or edge-slot tables would not fit in memory.
    ///
    /// Empty sizes (`rows == 0` or `cols == 0`) always pass.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.is_empty() {
            return Ok(());
        }
        let fits = self
            .rows
            .checked_mul(self.cols)
            .filter(|&n| n <= Self::MAX_PIECES)
            .and_then(|_| self.rows.checked_add(1)?.checked_mul(self.cols))
            .and_then(|_| self.cols.checked_add(1)?.checked_mul(self.rows))
            .is_some();
        if fits {
            Ok(())
        } else {
            Err(GridError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                max: Self::MAX_PIECES,
            })
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell on `side` of `(row, col)`, if it is inside the grid.
    pub fn step(&self, row: usize, col: usize, side: Side) -> Option<(usize, usize)> {
        let (dr, dc) = side.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.contains(r, c).then_some((r, c))
    }
}

/// Replay token so grids are reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Seed bytes are `seed` then `index`, little-endian; distinct tokens never share a stream.
    pub fn to_std_rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }

    /// The token for the next grid in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Row-major table of pieces. Owns its pieces; immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    dims: GridDims,
    pieces: Vec<PuzzlePiece>,
}

impl Grid {
    /// Generate a fresh grid, every interior edge uniformly random.
    ///
    /// `dims` should pass [`GridDims::validate`]; [`Grid::try_generate`] checks it.
    pub fn generate<R: Rng + ?Sized>(dims: GridDims, rng: &mut R) -> Self {
        let edges = EdgeMap::random(dims, rng);
        let grid = Self::from_edge_map(&edges);
        tracing::debug!(
            rows = dims.rows,
            cols = dims.cols,
            interior_edges = edges.interior_count(),
            "grid generated"
        );
        grid
    }

    /// [`Grid::generate`] after checking `dims`.
    pub fn try_generate<R: Rng + ?Sized>(dims: GridDims, rng: &mut R) -> Result<Self, GridError> {
        dims.validate()?;
        Ok(Self::generate(dims, rng))
    }

    /// Shorthand for `generate(dims, &mut token.to_std_rng())`.
    pub fn replay(dims: GridDims, token: ReplayToken) -> Self {
        Self::generate(dims, &mut token.to_std_rng())
    }

    /// Materialise the pieces of `edges` in row-major order.
    ///
    /// Panics if an inherited edge disagrees with the map: that can only be
    /// a bug in this module, never bad input.
    pub fn from_edge_map(edges: &EdgeMap) -> Self {
        let dims = edges.dims();
        let mut pieces: Vec<PuzzlePiece> = Vec::with_capacity(dims.len());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let above = row.checked_sub(1).map(|r| &pieces[r * dims.cols + col]);
                let left = col.checked_sub(1).map(|c| &pieces[row * dims.cols + c]);
                let inherited = PuzzlePiece::from_neighbors(above, None, None, left);
                let fresh = edges.bounded_piece(row, col);
                assert!(
                    inherited.top == fresh.top && inherited.left == fresh.left,
                    "edge map disagrees with built neighbours at ({row}, {col})"
                );
                pieces.push(PuzzlePiece {
                    top: inherited.top,
                    left: inherited.left,
                    ..fresh
                });
            }
        }
        Self { dims, pieces }
    }

    /// Wrap an externally built row-major table after checking it.
    pub fn from_pieces(dims: GridDims, pieces: Vec<PuzzlePiece>) -> Result<Self, GridError> {
        dims.validate()?;
        if pieces.len() != dims.len() {
            return Err(GridError::DimensionMismatch {
                expected: dims.len(),
                got: pieces.len(),
            });
        }
        let grid = Self { dims, pieces };
        grid.check_adjacency()?;
        Ok(grid)
    }

    /// Verify the border and adjacency invariants for every piece.
    pub fn check_adjacency(&self) -> Result<(), GridError> {
        for (row, col, piece) in self.iter() {
            for side in Side::ALL {
                match self.neighbor(row, col, side) {
                    None if piece.edge(side).is_some() => {
                        return Err(GridError::BorderNub { row, col, side });
                    }
                    Some(other) if !piece.fits(side, other) => {
                        return Err(GridError::Mismatch { row, col, side });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Piece at `(row, col)`; `None` out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&PuzzlePiece> {
        self.dims
            .contains(row, col)
            .then(|| &self.pieces[row * self.dims.cols + col])
    }

    /// Piece on `side` of `(row, col)`; `None` past the border.
    pub fn neighbor(&self, row: usize, col: usize, side: Side) -> Option<&PuzzlePiece> {
        let (r, c) = self.dims.step(row, col, side)?;
        self.get(r, c)
    }

    /// One row as a slice; `None` out of range.
    pub fn row(&self, row: usize) -> Option<&[PuzzlePiece]> {
        (row < self.dims.rows).then(|| &self.pieces[row * self.dims.cols..(row + 1) * self.dims.cols])
    }

    /// `(row, col, piece)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &PuzzlePiece)> + '_ {
        let cols = self.dims.cols;
        self.pieces
            .iter()
            .enumerate()
            .map(move |(i, p)| (i / cols, i % cols, p))
    }
}
