//! Depth-limited game-tree search.
//!
//! Two interchangeable procedures explore the tree in natural board-index
//! order: exhaustive minimax and alpha-beta pruning. Both return the root
//! value together with the best root child, and must agree on both for any
//! input. All per-search state lives in a [`Searcher`] created for one
//! invocation, so searches never share mutable state.

pub mod alphabeta;
pub mod minimax;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{MoveKind, Player, Position, Weights};
use crate::eval;

/// Value returned by a maximizing node with no legal placement.
pub const NO_MOVE_MAX: i32 = i32::MIN;
/// Value returned by a minimizing node with no legal placement.
pub const NO_MOVE_MIN: i32 = i32::MAX;

/// Search procedure selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// Returns the setup-file token.
    pub const fn token(self) -> &'static str {
        match self {
            Algorithm::Minimax => "MINIMAX",
            Algorithm::AlphaBeta => "ALPHABETA",
        }
    }

    /// Parses a setup-file token.
    pub fn from_token(s: &str) -> Option<Algorithm> {
        match s {
            "MINIMAX" => Some(Algorithm::Minimax),
            "ALPHABETA" => Some(Algorithm::AlphaBeta),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Immutable parameters of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub max_player: Player,
    pub depth: u32,
}

/// The best root-level child found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    /// Board after the move, raids applied.
    pub position: Position,
    pub score: i32,
    pub index: usize,
    pub label: String,
    pub kind: MoveKind,
}

impl BestMove {
    fn from_child(child: Position, score: i32) -> Self {
        BestMove {
            index: child.placed.unwrap_or_default(),
            label: child.move_label.clone(),
            kind: child.kind,
            position: child,
            score,
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions entered, root included.
    pub nodes: u64,
    /// Positions scored by the static evaluation.
    pub leaves: u64,
    /// Pruning cutoffs taken. Always zero for minimax.
    pub cutoffs: u64,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub depth: u32,
    /// Minimax value of the root for the maximizing player.
    pub score: i32,
    /// `None` when the depth is zero or the root board is full.
    pub best: Option<BestMove>,
    pub stats: SearchStats,
}

/// State for a single search invocation.
pub(crate) struct Searcher<'a> {
    weights: &'a Weights,
    max_player: Player,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(weights: &'a Weights, max_player: Player) -> Self {
        Searcher {
            weights,
            max_player,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn enter(&mut self) {
        self.stats.nodes += 1;
    }

    /// Static evaluation at a cutoff node.
    #[inline]
    fn leaf(&mut self, position: &Position) -> i32 {
        self.stats.leaves += 1;
        eval::score(position, self.weights, self.max_player)
    }
}

/// Replaces `best` when `score` strictly improves on it. The first child
/// offered is always taken, so the lowest index wins ties.
fn offer(best: &mut Option<BestMove>, child: &Position, score: i32) {
    let improves = match best {
        None => true,
        Some(b) => score > b.score,
    };
    if improves {
        *best = Some(BestMove::from_child(child.clone(), score));
    }
}

/// Runs the configured search from `root` and returns its outcome.
pub fn search(root: &Position, weights: &Weights, config: &SearchConfig) -> SearchOutcome {
    let outcome = match config.algorithm {
        Algorithm::Minimax => minimax::search(root, weights, config.max_player, config.depth),
        Algorithm::AlphaBeta => alphabeta::search(root, weights, config.max_player, config.depth),
    };

    debug!(
        "{} depth {}: score {}, move {}, {} nodes, {} leaves, {} cutoffs",
        outcome.algorithm,
        outcome.depth,
        outcome.score,
        outcome.best.as_ref().map_or("none", |b| b.label.as_str()),
        outcome.stats.nodes,
        outcome.stats.leaves,
        outcome.stats.cutoffs,
    );
    outcome
}
