//! Weighted material difference.

use crate::board::{Cell, Player, Position, Weights, MAX_TOTAL_WEIGHT};

/// Scores `position` from `max_player`'s perspective: the weights of cells
/// it owns minus the weights of cells its opponent owns.
///
/// Always within `±MAX_TOTAL_WEIGHT`, so never a no-move value. Weights
/// built by `Weights::from_rows` never reach the clamp.
pub fn score(position: &Position, weights: &Weights, max_player: Player) -> i32 {
    debug_assert_eq!(position.len(), weights.values().len());
    let total: i64 = position
        .cells()
        .iter()
        .zip(weights.values())
        .map(|(cell, &w)| match *cell {
            Cell::Empty => 0,
            Cell::Owned(p) if p == max_player => i64::from(w),
            Cell::Owned(_) => -i64::from(w),
        })
        .sum();
    total.clamp(-MAX_TOTAL_WEIGHT, MAX_TOTAL_WEIGHT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let pos = Position::empty(4).unwrap();
        assert_eq!(score(&pos, &Weights::uniform(4, 9), Player::O), 0);
    }

    #[test]
    fn weighted_difference() {
        let pos = Position::from_rows(&["OX", ".O"]).unwrap();
        let weights = Weights::from_rows(vec![vec![5, 3], vec![100, 2]]).unwrap();
        assert_eq!(score(&pos, &weights, Player::O), 5 + 2 - 3);
        assert_eq!(score(&pos, &weights, Player::X), 3 - 5 - 2);
    }

    #[test]
    fn extreme_weights_stay_inside_score_range() {
        let pos = Position::from_rows(&["X"]).unwrap();
        let weights = Weights::from_rows(vec![vec![-MAX_TOTAL_WEIGHT as i32]]).unwrap();
        assert_eq!(score(&pos, &weights, Player::O), MAX_TOTAL_WEIGHT as i32);
        assert_eq!(score(&pos, &weights, Player::X), -MAX_TOTAL_WEIGHT as i32);

        // Unchecked weights saturate instead of wrapping.
        let full = Position::from_rows(&["OO", "OO"]).unwrap();
        let huge = Weights::uniform(2, i32::MAX);
        assert_eq!(score(&full, &huge, Player::O), i32::MAX - 1);
        assert_eq!(score(&full, &huge, Player::X), -(i32::MAX - 1));

        let low = Weights::uniform(2, i32::MIN);
        assert_eq!(score(&full, &low, Player::O), -(i32::MAX - 1));
        assert_eq!(score(&full, &low, Player::X), i32::MAX - 1);
    }

    #[test]
    fn antisymmetric_in_players() {
        let boards = [
            ["OXO", "XOX", "OXO"],
            ["OOO", "XXX", "O.X"],
            ["...", ".X.", "..."],
        ];
        let weights = Weights::from_rows(vec![vec![1, -2, 3], vec![4, 5, 6], vec![-7, 8, 9]]).unwrap();
        for rows in boards {
            let pos = Position::from_rows(&rows).unwrap();
            assert_eq!(
                score(&pos, &weights, Player::O),
                -score(&pos, &weights, Player::X)
            );
        }
    }
}
