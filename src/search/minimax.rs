//! Exhaustive minimax.

use crate::board::{Player, Position, Weights};
use crate::movegen::children;

use super::{offer, Algorithm, BestMove, SearchOutcome, Searcher, NO_MOVE_MAX, NO_MOVE_MIN};

/// Searches every line to `depth` plies with `max_player` moving first.
pub fn search(root: &Position, weights: &Weights, max_player: Player, depth: u32) -> SearchOutcome {
    let mut searcher = Searcher::new(weights, max_player);
    let (score, best) = root_search(&mut searcher, root, depth);
    SearchOutcome {
        algorithm: Algorithm::Minimax,
        depth,
        score,
        best,
        stats: searcher.stats,
    }
}

/// The root ply always maximizes for the configured player and tracks the
/// argmax child.
fn root_search(
    s: &mut Searcher<'_>,
    root: &Position,
    depth: u32,
) -> (i32, Option<BestMove>) {
    s.enter();
    if depth == 0 {
        return (s.leaf(root), None);
    }

    let player = s.max_player;
    let mut best_score = NO_MOVE_MAX;
    let mut best = None;
    for child in children(root, player) {
        let value = minimax(s, &child, depth - 1, false, player.opponent());
        best_score = best_score.max(value);
        offer(&mut best, &child, value);
    }
    (best_score, best)
}

/// Returns the minimax value of `position` with `remaining` plies left.
pub(crate) fn minimax(
    s: &mut Searcher<'_>,
    position: &Position,
    remaining: u32,
    maximizing: bool,
    to_move: Player,
) -> i32 {
    s.enter();
    if remaining == 0 {
        return s.leaf(position);
    }

    let mut best = if maximizing { NO_MOVE_MAX } else { NO_MOVE_MIN };
    for child in children(position, to_move) {
        let value = minimax(s, &child, remaining - 1, !maximizing, to_move.opponent());
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveKind;

    #[test]
    fn counts_every_node_of_the_tree() {
        // 2x2 empty board, depth 2: 1 root + 4 children + 4*3 grandchildren.
        let root = Position::empty(2).unwrap();
        let outcome = search(&root, &Weights::uniform(2, 1), Player::O, 2);
        assert_eq!(outcome.stats.nodes, 1 + 4 + 12);
        assert_eq!(outcome.stats.leaves, 12);
        assert_eq!(outcome.stats.cutoffs, 0);
    }

    #[test]
    fn opponent_reply_is_minimized() {
        // Both O moves look equal one ply deep. After B1, X answers B2 next
        // to its A2 mark and raids B1 back (OX/XX = -2). After B2, X's only
        // reply B1 has no friendly neighbor and cannot raid (OX/XO = 0).
        let root = Position::from_rows(&["O.", "X."]).unwrap();
        let weights = Weights::uniform(2, 1);

        let shallow = search(&root, &weights, Player::O, 1);
        assert_eq!(shallow.score, 1);
        assert_eq!(shallow.best.expect("a move").label, "B1");

        let outcome = search(&root, &weights, Player::O, 2);
        let best = outcome.best.expect("a move");
        assert_eq!(outcome.score, 0);
        assert_eq!(best.label, "B2");
        assert_eq!(best.kind, MoveKind::Stake);
        assert_eq!(best.position.rows(), vec!["O.", "XO"]);
    }

    #[test]
    fn nodes_grow_with_depth() {
        let root = Position::from_rows(&["X..", "...", "..O"]).unwrap();
        let weights = Weights::uniform(3, 1);
        let mut previous = 0;
        for depth in 0..=4 {
            let nodes = search(&root, &weights, Player::O, depth).stats.nodes;
            assert!(nodes >= previous, "depth {} visited {} < {}", depth, nodes, previous);
            previous = nodes;
        }
    }

    #[test]
    fn interior_full_board_returns_sentinels() {
        let weights = Weights::uniform(2, 1);
        let full = Position::from_rows(&["OX", "XO"]).unwrap();
        let mut s = Searcher::new(&weights, Player::O);
        assert_eq!(minimax(&mut s, &full, 2, true, Player::O), NO_MOVE_MAX);
        assert_eq!(minimax(&mut s, &full, 2, false, Player::X), NO_MOVE_MIN);
        assert_eq!(s.stats.nodes, 2);
    }

    #[test]
    fn depth_beyond_empty_cells_propagates_sentinel() {
        // One empty cell, depth 2: O fills it, then X has nothing to play
        // and the minimizing node returns its identity.
        let root = Position::from_rows(&["OX", "X."]).unwrap();
        let outcome = search(&root, &Weights::uniform(2, 1), Player::O, 2);
        assert_eq!(outcome.score, NO_MOVE_MIN);
        let best = outcome.best.expect("a move");
        assert_eq!(best.label, "B2");
    }
}
