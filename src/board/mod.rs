//! Board representation.
//!
//! Contains cells and players, positions with their move bookkeeping, and
//! the shared per-cell weights.

pub mod cell;
pub mod position;
pub mod weights;

pub use cell::{Cell, Player};
pub use position::{coordinate, MoveKind, Position, Region, MAX_SIZE};
pub use weights::{Weights, MAX_TOTAL_WEIGHT};

/// Errors raised while building a board or weight matrix.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board size {0} is out of range (1..={max})", max = MAX_SIZE)]
    SizeOutOfRange(usize),

    #[error("row {row} has {found} entries, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{found}' at row {row}, column {column}")]
    InvalidCell { row: usize, column: usize, found: char },

    #[error("absolute values sum to {total}, limit is {max}", max = MAX_TOTAL_WEIGHT)]
    WeightTotal { total: i64 },
}
