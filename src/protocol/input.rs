//! Setup file parsing.
//!
//! The text format is line oriented:
//!
//! ```text
//! 3            board side, 1..=26
//! ALPHABETA    MINIMAX or ALPHABETA
//! O            maximizing player
//! 2            depth limit
//! 1 1 1        `size` rows of whitespace-separated weights
//! 1 5 1
//! 1 1 1
//! ...          `size` rows of O, X and .
//! .X.
//! ...
//! ```
//!
//! A JSON document with the same fields is accepted as well; see
//! [`parse_setup_json`].

use serde::Deserialize;

use crate::board::{BoardError, Player, Position, Weights, MAX_SIZE};
use crate::search::{Algorithm, SearchConfig};

/// Errors that can occur while parsing a setup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("line {line}: missing {what}")]
    MissingLine { line: usize, what: &'static str },

    #[error("line {line}: invalid board size '{value}'")]
    InvalidSize { line: usize, value: String },

    #[error("board size {0} is out of range (1..={max})", max = MAX_SIZE)]
    SizeOutOfRange(usize),

    #[error("line {line}: unknown algorithm '{value}', expected MINIMAX or ALPHABETA")]
    InvalidAlgorithm { line: usize, value: String },

    #[error("line {line}: unknown player '{value}', expected O or X")]
    InvalidPlayer { line: usize, value: String },

    #[error("line {line}: invalid depth '{value}'")]
    InvalidDepth { line: usize, value: String },

    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight { line: usize, value: String },

    #[error("{section} has {found} rows but the board size is {expected}")]
    RowCount {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("weights: {0}")]
    Weights(#[source] BoardError),

    #[error("board: {0}")]
    Board(#[source] BoardError),

    #[error("line {line}: unexpected trailing content '{value}'")]
    TrailingLine { line: usize, value: String },

    #[error("invalid JSON setup: {0}")]
    Json(#[from] serde_json::Error),
}

/// A fully validated search setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub algorithm: Algorithm,
    pub max_player: Player,
    pub depth: u32,
    pub weights: Weights,
    pub position: Position,
}

impl GameSetup {
    pub fn size(&self) -> usize {
        self.position.size()
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            algorithm: self.algorithm,
            max_player: self.max_player,
            depth: self.depth,
        }
    }
}

/// Line cursor that tracks 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(s: &'a str) -> Self {
        Lines {
            inner: s.lines().enumerate(),
            last: 0,
        }
    }

    /// Returns the next line and its number, or a `MissingLine` error.
    fn expect(&mut self, what: &'static str) -> Result<(usize, &'a str), SetupError> {
        match self.inner.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((i + 1, line.trim_end_matches('\r')))
            }
            None => Err(SetupError::MissingLine {
                line: self.last + 1,
                what,
            }),
        }
    }
}

fn parse_size(line: usize, s: &str) -> Result<usize, SetupError> {
    let size: usize = s.trim().parse().map_err(|_| SetupError::InvalidSize {
        line,
        value: s.to_string(),
    })?;
    if size == 0 || size > MAX_SIZE {
        return Err(SetupError::SizeOutOfRange(size));
    }
    Ok(size)
}

fn parse_algorithm(line: usize, s: &str) -> Result<Algorithm, SetupError> {
    Algorithm::from_token(s.trim()).ok_or_else(|| SetupError::InvalidAlgorithm {
        line,
        value: s.to_string(),
    })
}

fn parse_player(line: usize, s: &str) -> Result<Player, SetupError> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    match (chars.next().and_then(Player::from_mark), chars.next()) {
        (Some(p), None) => Ok(p),
        _ => Err(SetupError::InvalidPlayer {
            line,
            value: s.to_string(),
        }),
    }
}

fn parse_depth(line: usize, s: &str) -> Result<u32, SetupError> {
    s.trim().parse().map_err(|_| SetupError::InvalidDepth {
        line,
        value: s.to_string(),
    })
}

fn parse_weight_row(line: usize, s: &str) -> Result<Vec<i32>, SetupError> {
    s.split_whitespace()
        .map(|tok| {
            tok.parse::<i32>().map_err(|_| SetupError::InvalidWeight {
                line,
                value: tok.to_string(),
            })
        })
        .collect()
}

/// Parses a text setup into a validated `GameSetup`.
pub fn parse_setup(s: &str) -> Result<GameSetup, SetupError> {
    let mut lines = Lines::new(s);

    let (n, text) = lines.expect("board size")?;
    let size = parse_size(n, text)?;
    let (n, text) = lines.expect("algorithm")?;
    let algorithm = parse_algorithm(n, text)?;
    let (n, text) = lines.expect("maximizing player")?;
    let max_player = parse_player(n, text)?;
    let (n, text) = lines.expect("depth")?;
    let depth = parse_depth(n, text)?;

    let mut weight_rows = Vec::with_capacity(size);
    for _ in 0..size {
        let (n, text) = lines.expect("weight row")?;
        weight_rows.push(parse_weight_row(n, text)?);
    }
    let weights = Weights::from_rows(weight_rows).map_err(SetupError::Weights)?;

    let mut board_rows = Vec::with_capacity(size);
    for _ in 0..size {
        let (_, text) = lines.expect("board row")?;
        board_rows.push(text.trim());
    }
    let position = Position::from_rows(&board_rows).map_err(SetupError::Board)?;

    while let Ok((n, text)) = lines.expect("") {
        if !text.trim().is_empty() {
            return Err(SetupError::TrailingLine {
                line: n,
                value: text.to_string(),
            });
        }
    }

    Ok(GameSetup {
        algorithm,
        max_player,
        depth,
        weights,
        position,
    })
}

/// JSON form of a setup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SetupDocument {
    size: usize,
    algorithm: Algorithm,
    player: Player,
    depth: u32,
    weights: Vec<Vec<i32>>,
    board: Vec<String>,
}

/// Parses a JSON setup such as
/// `{"size":2,"algorithm":"MINIMAX","player":"O","depth":1,"weights":[[1,1],[1,1]],"board":["..",".X"]}`.
pub fn parse_setup_json(s: &str) -> Result<GameSetup, SetupError> {
    let doc: SetupDocument = serde_json::from_str(s)?;
    if doc.size == 0 || doc.size > MAX_SIZE {
        return Err(SetupError::SizeOutOfRange(doc.size));
    }
    if doc.weights.len() != doc.size {
        return Err(SetupError::RowCount {
            section: "weights",
            expected: doc.size,
            found: doc.weights.len(),
        });
    }
    if doc.board.len() != doc.size {
        return Err(SetupError::RowCount {
            section: "board",
            expected: doc.size,
            found: doc.board.len(),
        });
    }

    let weights = Weights::from_rows(doc.weights).map_err(SetupError::Weights)?;
    let position = Position::from_rows(&doc.board).map_err(SetupError::Board)?;
    Ok(GameSetup {
        algorithm: doc.algorithm,
        max_player: doc.player,
        depth: doc.depth,
        weights,
        position,
    })
}
