//! Engine front end.
//!
//! Holds one loaded setup, applies command-line overrides, runs the
//! configured search and renders the chosen move. The engine keeps no
//! state between searches.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::board::Player;
use crate::protocol::{
    encode_report, format_result, parse_setup, parse_setup_json, GameSetup, OutputFormat, Report,
    SetupError,
};
use crate::search::{search, Algorithm, SearchOutcome};

/// Errors surfaced to the driver, each with its own exit status.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed setup: {0}")]
    Setup(#[from] SetupError),

    #[error("no move available at depth {depth} (depth 0 or a full board)")]
    NoMove { depth: u32 },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EngineError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EngineError::Load { .. } => 1,
            EngineError::Setup(_) => 2,
            EngineError::NoMove { .. } => 3,
            EngineError::Encode(_) | EngineError::Write { .. } => 4,
        }
    }
}

pub struct Engine {
    setup: GameSetup,
}

impl Engine {
    pub fn new(setup: GameSetup) -> Self {
        Engine { setup }
    }

    /// Reads a setup file. Files ending in `.json` use the JSON form.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let setup = if is_json {
            parse_setup_json(&text)?
        } else {
            parse_setup(&text)?
        };

        info!(
            "loaded {}x{} board from {} ({} O, {} X): {} for {}, depth {}",
            setup.size(),
            setup.size(),
            path.display(),
            setup.position.count(Player::O),
            setup.position.count(Player::X),
            setup.algorithm,
            setup.max_player,
            setup.depth
        );
        Ok(Engine::new(setup))
    }

    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Replaces the algorithm chosen by the setup file.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.setup.algorithm = algorithm;
    }

    /// Replaces the depth limit chosen by the setup file.
    pub fn set_depth(&mut self, depth: u32) {
        self.setup.depth = depth;
    }

    /// Runs the configured search once.
    pub fn run(&self) -> SearchOutcome {
        let outcome = search(&self.setup.position, &self.setup.weights, &self.setup.config());
        if outcome.best.is_none() {
            warn!(
                "search at depth {} found no move, root score {}",
                outcome.depth, outcome.score
            );
        }
        outcome
    }

    /// Renders the outcome of [`Engine::run`] in `format`.
    pub fn render(&self, outcome: &SearchOutcome, format: OutputFormat) -> Result<String, EngineError> {
        let best = outcome.best.as_ref().ok_or(EngineError::NoMove {
            depth: outcome.depth,
        })?;
        match format {
            OutputFormat::Text => Ok(format_result(best)),
            OutputFormat::Json => {
                let report = Report::from_outcome(outcome).ok_or(EngineError::NoMove {
                    depth: outcome.depth,
                })?;
                Ok(encode_report(&report)?)
            }
        }
    }

    /// Searches and writes the rendered result to `path`, returning the
    /// rendered text. Nothing is written when the search finds no move.
    pub fn run_to_file<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<String, EngineError> {
        let path = path.as_ref();
        let outcome = self.run();
        let rendered = self.render(&outcome, format)?;
        fs::write(path, &rendered).map_err(|source| EngineError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(rendered)
    }
}
