//! Errors for the fallible entry points (grid sizes, externally supplied grids, render config).
//!
//! Generation and drawing themselves never fail; see `grid::Grid::generate`.

use thiserror::Error;

use crate::piece::Side;

/// Problems with grid dimensions or a piece table handed to
/// [`crate::grid::Grid::from_pieces`].
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("a {rows}x{cols} grid exceeds the limit of {max} pieces")]
    TooLarge { rows: usize, cols: usize, max: usize },

    #[error("expected {expected} pieces for the grid, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("piece ({row}, {col}) does not interlock with its {side:?} neighbour")]
    Mismatch { row: usize, col: usize, side: Side },

    #[error("piece ({row}, {col}) has a nub on its {side:?} border")]
    BorderNub { row: usize, col: usize, side: Side },
}

/// Invalid rendering parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("piece_width must be positive, got {0}")]
    NonPositiveWidth(f64),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}
