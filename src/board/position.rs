//! Board positions.
//!
//! A `Position` is a square grid of cells stored row-major, plus the
//! bookkeeping the search attaches to a child: the move that produced it,
//! whether that move raided, and the board region of the placed cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player};
use super::BoardError;

/// Largest supported board side. Column labels use the letters `A`..=`Z`.
pub const MAX_SIZE: usize = 26;

/// Whether a move captured anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveKind {
    /// A plain placement.
    #[default]
    Stake,
    /// A placement that flipped at least one adjacent opposing cell.
    Raid,
}

impl MoveKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveKind::Stake => "Stake",
            MoveKind::Raid => "Raid",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal region of a cell, which decides its left/right neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LeftEdge,
    RightEdge,
    Interior,
    /// Side-1 board: the only column is both edges.
    SingleColumn,
}

impl Region {
    /// Classifies `index` on a board of side `size`.
    pub const fn of(index: usize, size: usize) -> Region {
        let left = index % size == 0;
        let right = (index + 1) % size == 0;
        match (left, right) {
            (true, true) => Region::SingleColumn,
            (true, false) => Region::LeftEdge,
            (false, true) => Region::RightEdge,
            (false, false) => Region::Interior,
        }
    }

    pub const fn has_left(self) -> bool {
        matches!(self, Region::RightEdge | Region::Interior)
    }

    pub const fn has_right(self) -> bool {
        matches!(self, Region::LeftEdge | Region::Interior)
    }
}

/// Returns the coordinate label for `index`, e.g. `B3` for column 1, row 2.
///
/// `size` must not exceed [`MAX_SIZE`].
pub fn coordinate(index: usize, size: usize) -> String {
    debug_assert!(size <= MAX_SIZE);
    let column = (b'A' + (index % size) as u8) as char;
    format!("{}{}", column, index / size + 1)
}

/// A board snapshot plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    size: usize,
    cells: Vec<Cell>,
    /// Index of the cell placed to reach this position, if any.
    pub placed: Option<usize>,
    /// Coordinate label of `placed`.
    pub move_label: String,
    pub kind: MoveKind,
    /// Region of `placed`, recorded by the adjacency test.
    pub region: Option<Region>,
}

impl Position {
    /// Creates an empty board of side `size`.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::from_parts(size, vec![Cell::Empty; size * size]))
    }

    /// Builds a position from row strings of `O`, `X` and `.`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                return Err(BoardError::RowWidth {
                    row: r + 1,
                    expected: size,
                    found: width,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(BoardError::InvalidCell {
                    row: r + 1,
                    column: c + 1,
                    found: ch,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self::from_parts(size, cells))
    }

    fn from_parts(size: usize, cells: Vec<Cell>) -> Self {
        Position {
            size,
            cells,
            placed: None,
            move_label: String::new(),
            kind: MoveKind::Stake,
            region: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Derives and records the coordinate label of a placement at `index`.
    pub fn set_move(&mut self, index: usize) -> &str {
        self.placed = Some(index);
        self.move_label = coordinate(index, self.size);
        &self.move_label
    }

    /// Returns the board as row strings, top row first.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Position {
    /// Writes one line per row, each terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size == 0 || size > MAX_SIZE {
        return Err(BoardError::SizeOutOfRange(size));
    }
    Ok(())
}
