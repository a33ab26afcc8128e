//! Shared edge table: every interior edge of the grid decided exactly once.
//!
//! Layout
//! - `horizontal`: `(rows + 1) × cols` slots; slot `(r, c)` lies between rows
//!   `r - 1` and `r` and stores the state as seen from the piece above it.
//! - `vertical`: `rows × (cols + 1)` slots; slot `(r, c)` lies between columns
//!   `c - 1` and `c` and stores the state as seen from the piece on its left.
//! - Slots on the outer frame are always `None`.

use rand::Rng;

use super::GridDims;
use crate::piece::{NubDirection, PuzzlePiece};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    dims: GridDims,
    horizontal: Vec<Option<NubDirection>>,
    vertical: Vec<Option<NubDirection>>,
}

impl EdgeMap {
    /// Draw every interior slot uniformly.
    ///
    /// Draw order is fixed (horizontal slots row-major, then vertical slots
    /// row-major), so a seeded `rng` reproduces the same map. An empty grid
    /// has no edges at all.
    pub fn random<R: Rng + ?Sized>(dims: GridDims, rng: &mut R) -> Self {
        if dims.is_empty() {
            return Self {
                dims,
                horizontal: Vec::new(),
                vertical: Vec::new(),
            };
        }
        let GridDims { rows, cols } = dims;
        let mut horizontal = vec![None; (rows + 1) * cols];
        for row in 1..rows {
            for col in 0..cols {
                horizontal[row * cols + col] = Some(NubDirection::random(rng));
            }
        }
        let mut vertical = vec![None; rows * (cols + 1)];
        for row in 0..rows {
            for col in 1..cols {
                vertical[row * (cols + 1) + col] = Some(NubDirection::random(rng));
            }
        }
        Self {
            dims,
            horizontal,
            vertical,
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Horizontal slot `(row, col)` with `row ∈ 0..=rows`; `None` outside.
    pub fn horizontal(&self, row: usize, col: usize) -> Option<NubDirection> {
        if row > self.dims.rows || col >= self.dims.cols {
            return None;
        }
        self.horizontal
            .get(row * self.dims.cols + col)
            .copied()
            .flatten()
    }

    /// Vertical slot `(row, col)` with `col ∈ 0..=cols`; `None` outside.
    pub fn vertical(&self, row: usize, col: usize) -> Option<NubDirection> {
        if row >= self.dims.rows || col > self.dims.cols {
            return None;
        }
        self.vertical
            .get(row * (self.dims.cols + 1) + col)
            .copied()
            .flatten()
    }

    /// The piece bounded by the four slots around `(row, col)`.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<PuzzlePiece> {
        self.dims
            .contains(row, col)
            .then(|| self.bounded_piece(row, col))
    }

    /// Slots seen from the other side (above, left) are inverted.
    pub(super) fn bounded_piece(&self, row: usize, col: usize) -> PuzzlePiece {
        PuzzlePiece::new(
            self.horizontal(row, col).map(NubDirection::opposite),
            self.vertical(row, col + 1),
            self.horizontal(row + 1, col),
            self.vertical(row, col).map(NubDirection::opposite),
        )
    }

    /// Number of interior (nubbed) edges.
    pub fn interior_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|s| s.is_some())
            .count()
    }
}
