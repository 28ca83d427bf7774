//! Orthogonal adjacency and raid resolution.
//!
//! Both checks probe the same neighbor set: left and right unless the cell
//! sits on that edge, up unless in the top row, down unless in the bottom
//! row. Corners have two neighbors, edges three, interior cells four.

use crate::board::{Cell, Player, Position, Region};

/// Returns the in-bounds orthogonal neighbors of `index`.
pub fn neighbors(index: usize, size: usize, region: Region) -> impl Iterator<Item = usize> {
    let left = region.has_left().then(|| index - 1);
    let right = region.has_right().then(|| index + 1);
    let up = (index >= size).then(|| index - size);
    let down = (index + size < size * size).then(|| index + size);
    [left, right, up, down].into_iter().flatten()
}

/// Returns true if any neighbor of the just-placed cell at `index` already
/// holds `player`'s mark.
///
/// Records the region of `index` on `position` for the raid check.
pub fn is_adjacent(position: &mut Position, player: Player, index: usize) -> bool {
    let size = position.size();
    let region = Region::of(index, size);
    position.region = Some(region);
    neighbors(index, size, region).any(|n| position.get(n).is_owned_by(player))
}

/// Flips every opposing neighbor of `index` to `player`.
///
/// Returns true if at least one cell was flipped. Must follow the placement
/// at `index` (and normally the adjacency test that recorded its region).
pub fn is_raid(position: &mut Position, player: Player, index: usize) -> bool {
    let size = position.size();
    let region = position
        .region
        .unwrap_or_else(|| Region::of(index, size));
    let opponent = player.opponent();

    let mut raided = false;
    for n in neighbors(index, size, region) {
        if position.get(n).is_owned_by(opponent) {
            position.set(n, Cell::Owned(player));
            raided = true;
        }
    }
    raided
}
