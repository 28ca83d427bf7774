//! Alpha-beta pruning.
//!
//! Explores children in the same order as minimax and stops expanding a
//! node once `alpha >= beta`. Returns the same root value and root move as
//! minimax while visiting at most as many nodes.

use crate::board::{Player, Position, Weights};
use crate::movegen::children;

use super::{offer, Algorithm, BestMove, SearchOutcome, Searcher, NO_MOVE_MAX, NO_MOVE_MIN};

/// Searches to `depth` plies with `max_player` moving first, pruning lines
/// that cannot change the root decision.
pub fn search(root: &Position, weights: &Weights, max_player: Player, depth: u32) -> SearchOutcome {
    let mut searcher = Searcher::new(weights, max_player);
    let (score, best) = root_search(&mut searcher, root, depth);
    SearchOutcome {
        algorithm: Algorithm::AlphaBeta,
        depth,
        score,
        best,
        stats: searcher.stats,
    }
}

fn root_search(s: &mut Searcher<'_>, root: &Position, depth: u32) -> (i32, Option<BestMove>) {
    s.enter();
    if depth == 0 {
        return (s.leaf(root), None);
    }

    let player = s.max_player;
    let mut alpha = NO_MOVE_MAX;
    let beta = NO_MOVE_MIN;
    let mut best_score = NO_MOVE_MAX;
    let mut best = None;
    for child in children(root, player) {
        let value = alpha_beta(s, &child, depth - 1, alpha, beta, false, player.opponent());
        best_score = best_score.max(value);
        // Record before the cutoff test so a pruning break keeps this child.
        offer(&mut best, &child, value);
        alpha = alpha.max(best_score);
        if alpha >= beta {
            s.stats.cutoffs += 1;
            break;
        }
    }
    (best_score, best)
}

/// Returns the value of `position` within the `(alpha, beta)` window.
///
/// Values at or outside the window are bounds, which is all a parent needs
/// to decide that the line does not matter.
pub(crate) fn alpha_beta(
    s: &mut Searcher<'_>,
    position: &Position,
    remaining: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    to_move: Player,
) -> i32 {
    s.enter();
    if remaining == 0 {
        return s.leaf(position);
    }

    if maximizing {
        let mut best = NO_MOVE_MAX;
        for child in children(position, to_move) {
            let value = alpha_beta(s, &child, remaining - 1, alpha, beta, false, to_move.opponent());
            best = best.max(value);
            alpha = alpha.max(best);
            if alpha >= beta {
                s.stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = NO_MOVE_MIN;
        for child in children(position, to_move) {
            let value = alpha_beta(s, &child, remaining - 1, alpha, beta, true, to_move.opponent());
            best = best.min(value);
            beta = beta.min(best);
            if alpha >= beta {
                s.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
