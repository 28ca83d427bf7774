//! Minimax versus alpha-beta comparison.
//!
//! Generates random positions, searches each with both algorithms, checks
//! that they agree on score and move, and records how many nodes each
//! visited. Positions are independent, so a run may spread them over a
//! rayon pool; every individual search stays single-threaded.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{BoardError, Cell, MoveKind, Player, Position, Weights};
use crate::protocol::GameSetup;
use crate::search::{alphabeta, minimax};

/// Configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Number of random positions to compare.
    pub positions: usize,
    /// Board side.
    pub size: usize,
    /// Search depth.
    pub depth: u32,
    /// Fraction of cells occupied before searching.
    pub fill: f64,
    /// Largest cell weight; weights are drawn from `1..=max_weight`.
    pub max_weight: i32,
    /// Number of worker threads.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        CompareConfig {
            positions: 20,
            size: 4,
            depth: 3,
            fill: 0.25,
            max_weight: 9,
            threads: 1,
            seed: 0,
        }
    }
}

/// Errors from a comparison run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(
        "position {id}: minimax chose {minimax_move} ({minimax_score}), \
         alpha-beta chose {alphabeta_move} ({alphabeta_score})"
    )]
    Mismatch {
        id: usize,
        minimax_move: String,
        minimax_score: i32,
        alphabeta_move: String,
        alphabeta_score: i32,
    },

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One compared position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub id: usize,
    pub size: usize,
    pub depth: u32,
    pub player: Player,
    pub board: Vec<String>,
    #[serde(rename = "move")]
    pub label: Option<String>,
    pub kind: Option<MoveKind>,
    pub score: i32,
    pub minimax_nodes: u64,
    pub alphabeta_nodes: u64,
    pub cutoffs: u64,
}

impl Comparison {
    /// Alpha-beta nodes as a fraction of minimax nodes.
    pub fn node_ratio(&self) -> f64 {
        if self.minimax_nodes == 0 {
            return 1.0;
        }
        self.alphabeta_nodes as f64 / self.minimax_nodes as f64
    }
}

/// Generates a random position with roughly `fill * size^2` marks and
/// uniform random weights.
pub fn random_position(
    size: usize,
    fill: f64,
    max_weight: i32,
    rng: &mut impl Rng,
) -> Result<(Position, Weights), BoardError> {
    let mut position = Position::empty(size)?;
    let fill = fill.clamp(0.0, 1.0);
    for i in 0..size * size {
        if rng.gen_bool(fill) {
            let player = if rng.gen_bool(0.5) { Player::O } else { Player::X };
            position.set(i, Cell::Owned(player));
        }
    }

    let max_weight = max_weight.max(1);
    let rows: Vec<Vec<i32>> = (0..size)
        .map(|_| (0..size).map(|_| rng.gen_range(1..=max_weight)).collect())
        .collect();
    Ok((position, Weights::from_rows(rows)?))
}

/// Searches `root` with both algorithms and checks they agree.
pub fn compare(
    id: usize,
    root: &Position,
    weights: &Weights,
    player: Player,
    depth: u32,
) -> Result<Comparison, AnalysisError> {
    let full = minimax::search(root, weights, player, depth);
    let pruned = alphabeta::search(root, weights, player, depth);

    let full_move = full.best.as_ref().map(|b| b.label.clone());
    let pruned_move = pruned.best.as_ref().map(|b| b.label.clone());
    if full.score != pruned.score || full_move != pruned_move {
        return Err(AnalysisError::Mismatch {
            id,
            minimax_move: full_move.unwrap_or_else(|| "none".to_string()),
            minimax_score: full.score,
            alphabeta_move: pruned_move.unwrap_or_else(|| "none".to_string()),
            alphabeta_score: pruned.score,
        });
    }

    Ok(Comparison {
        id,
        size: root.size(),
        depth,
        player,
        board: root.rows(),
        label: full_move,
        kind: full.best.as_ref().map(|b| b.kind),
        score: full.score,
        minimax_nodes: full.stats.nodes,
        alphabeta_nodes: pruned.stats.nodes,
        cutoffs: pruned.stats.cutoffs,
    })
}

/// Compares both algorithms on a loaded setup.
pub fn compare_setup(setup: &GameSetup) -> Result<Comparison, AnalysisError> {
    compare(0, &setup.position, &setup.weights, setup.max_player, setup.depth)
}

/// Generates and compares position `id` from its own seeded RNG, so results
/// do not depend on the number of threads.
fn compare_random(config: &CompareConfig, base_seed: u64, id: usize) -> Result<Comparison, AnalysisError> {
    let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(id as u64));
    let (position, weights) = random_position(config.size, config.fill, config.max_weight, &mut rng)?;
    let player = if rng.gen_bool(0.5) { Player::O } else { Player::X };
    compare(id, &position, &weights, player, config.depth)
}

/// Runs a full comparison, in parallel when `config.threads > 1`.
pub fn run_comparisons(config: &CompareConfig) -> Result<Vec<Comparison>, AnalysisError> {
    let base_seed = if config.seed != 0 {
        config.seed
    } else {
        rand::random()
    };

    if config.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| {
            (0..config.positions)
                .into_par_iter()
                .map(|id| compare_random(config, base_seed, id))
                .collect()
        })
    } else {
        (0..config.positions)
            .map(|id| compare_random(config, base_seed, id))
            .collect()
    }
}

/// Writes comparisons as JSON lines.
pub fn write_jsonl<W: Write>(records: &[Comparison], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate node counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub positions: usize,
    pub minimax_nodes: u64,
    pub alphabeta_nodes: u64,
    pub cutoffs: u64,
}

impl Summary {
    pub fn from_records(records: &[Comparison]) -> Self {
        records.iter().fold(Summary::default(), |mut s, r| {
            s.positions += 1;
            s.minimax_nodes += r.minimax_nodes;
            s.alphabeta_nodes += r.alphabeta_nodes;
            s.cutoffs += r.cutoffs;
            s
        })
    }

    /// Fraction of minimax nodes that alpha-beta skipped.
    pub fn savings(&self) -> f64 {
        if self.minimax_nodes == 0 {
            return 0.0;
        }
        1.0 - self.alphabeta_nodes as f64 / self.minimax_nodes as f64
    }
}
