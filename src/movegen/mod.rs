//! Move generation.
//!
//! Every empty cell is a legal placement. A placement next to one of the
//! mover's own marks raids: all orthogonally adjacent opposing marks flip.
//! Children are produced in ascending board-index order.

pub mod adjacency;

pub use adjacency::{is_adjacent, is_raid, neighbors};

use crate::board::{Cell, MoveKind, Player, Position};

/// Returns the child reached by `player` staking the empty cell at `index`.
pub fn play(parent: &Position, index: usize, player: Player) -> Position {
    debug_assert!(parent.get(index).is_empty(), "cell {} is occupied", index);

    let mut child = parent.clone();
    child.kind = MoveKind::Stake;
    child.region = None;

    child.set(index, Cell::Owned(player));
    child.set_move(index);
    if is_adjacent(&mut child, player, index) && is_raid(&mut child, player, index) {
        child.kind = MoveKind::Raid;
    }
    child
}

/// Iterates over every child of `parent` with `player` to move.
pub fn children(parent: &Position, player: Player) -> impl Iterator<Item = Position> + '_ {
    parent
        .empty_indices()
        .map(move |index| play(parent, index, player))
}
