//! Alpha-beta must choose the same move and score as plain minimax.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use stake_raid::analysis::random_position;
use stake_raid::board::{Player, Position, Weights};
use stake_raid::search::{alphabeta, minimax};

#[test]
fn random_boards_agree() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for size in 1..=4 {
        for fill in [0.0, 0.3, 0.7] {
            for depth in 0..=3 {
                let (root, weights) = random_position(size, fill, 9, &mut rng).unwrap();
                for player in [Player::O, Player::X] {
                    let full = minimax::search(&root, &weights, player, depth);
                    let pruned = alphabeta::search(&root, &weights, player, depth);
                    assert_eq!(full.score, pruned.score, "size {} depth {}\n{}", size, depth, root);
                    assert_eq!(
                        full.best.as_ref().map(|b| b.index),
                        pruned.best.as_ref().map(|b| b.index),
                        "size {} depth {}\n{}",
                        size,
                        depth,
                        root
                    );
                    assert!(pruned.stats.nodes <= full.stats.nodes);
                    assert_eq!(full.stats.cutoffs, 0);
                }
            }
        }
    }
}

#[test]
fn first_empty_cell_wins_ties() {
    // Every opening on an empty uniform board scores the same.
    let root = Position::empty(3).unwrap();
    let weights = Weights::uniform(3, 1);
    for depth in 1..=3 {
        let full = minimax::search(&root, &weights, Player::X, depth);
        let pruned = alphabeta::search(&root, &weights, Player::X, depth);
        assert_eq!(full.best.as_ref().map(|b| b.label.as_str()), Some("A1"));
        assert_eq!(pruned.best.as_ref().map(|b| b.label.as_str()), Some("A1"));
    }
}
