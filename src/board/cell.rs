//! Players and cell occupancy.
//!
//! A cell is either empty or staked by one of the two players. Both types
//! are `Copy` and map one-to-one onto the characters used by the setup
//! file and the printed board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Returns the board character for this player's mark.
    pub const fn mark(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }

    /// Parses a player from its board character.
    pub fn from_mark(c: char) -> Option<Player> {
        match c {
            'O' => Some(Player::O),
            'X' => Some(Player::X),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    /// Character used for an empty cell.
    pub const EMPTY_CHAR: char = '.';

    /// Returns the owning player, or `None` for an empty cell.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(p) => Some(p),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds `player`'s mark.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Owned(player)
    }

    /// Returns the board character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => Cell::EMPTY_CHAR,
            Cell::Owned(p) => p.mark(),
        }
    }

    /// Parses a cell from its board character.
    pub fn from_char(c: char) -> Option<Cell> {
        if c == Cell::EMPTY_CHAR {
            return Some(Cell::Empty);
        }
        Player::from_mark(c).map(Cell::Owned)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Owned(player)
    }
}
