//! Per-cell weights.
//!
//! Set once when a setup is loaded and shared read-only by every position
//! the search visits.

use super::BoardError;

/// Largest allowed sum of absolute weights. Keeps every score strictly
/// between `i32::MIN` and `i32::MAX`, the search's no-move values.
pub const MAX_TOTAL_WEIGHT: i64 = i32::MAX as i64 - 1;

/// Integer value of each board cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    size: usize,
    values: Vec<i32>,
}

impl Weights {
    /// Every cell worth `value`.
    pub fn uniform(size: usize, value: i32) -> Self {
        Weights {
            size,
            values: vec![value; size * size],
        }
    }

    /// Builds weights from a square matrix whose absolute values sum to at
    /// most [`MAX_TOTAL_WEIGHT`].
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::RowWidth {
                    row: r + 1,
                    expected: size,
                    found: row.len(),
                });
            }
            values.extend(row);
        }

        let weights = Weights { size, values };
        let total = weights.total_magnitude();
        if total > MAX_TOTAL_WEIGHT {
            return Err(BoardError::WeightTotal { total });
        }
        Ok(weights)
    }

    /// Sum of absolute weights, the largest magnitude a score can reach.
    pub fn total_magnitude(&self) -> i64 {
        self.values.iter().map(|&w| i64::from(w).abs()).sum()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }
}
