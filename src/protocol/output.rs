//! Result serialization.
//!
//! The text form is the move line (`<label> <Stake|Raid>`) followed by the
//! resulting board, one row per line, with no newline after the last row.
//! The JSON form is a single line that adds the score and search
//! statistics.

use serde::Serialize;

use crate::board::MoveKind;
use crate::search::{Algorithm, BestMove, SearchOutcome};

/// Output encoding for a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formats a chosen move and its board in the text form.
pub fn format_result(best: &BestMove) -> String {
    format!("{} {}\n{}", best.label, best.kind, best.position.rows().join("\n"))
}

/// JSON report of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "move")]
    pub label: String,
    pub kind: MoveKind,
    pub score: i32,
    pub algorithm: Algorithm,
    pub depth: u32,
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub board: Vec<String>,
}

impl Report {
    /// Builds a report, or `None` if the search chose no move.
    pub fn from_outcome(outcome: &SearchOutcome) -> Option<Report> {
        let best = outcome.best.as_ref()?;
        Some(Report {
            label: best.label.clone(),
            kind: best.kind,
            score: outcome.score,
            algorithm: outcome.algorithm,
            depth: outcome.depth,
            nodes: outcome.stats.nodes,
            leaves: outcome.stats.leaves,
            cutoffs: outcome.stats.cutoffs,
            board: best.position.rows(),
        })
    }
}

/// Encodes `report` as a single newline-terminated JSON line.
pub fn encode_report(report: &Report) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(report)?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, Position, Weights};
    use crate::search::{search, SearchConfig};

    fn raid_outcome() -> SearchOutcome {
        let root = Position::from_rows(&["O..", ".X.", "..."]).unwrap();
        let config = SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            max_player: Player::O,
            depth: 1,
        };
        search(&root, &Weights::uniform(3, 1), &config)
    }

    #[test]
    fn text_result_layout() {
        let outcome = raid_outcome();
        let text = format_result(outcome.best.as_ref().unwrap());
        assert_eq!(text, "B1 Raid\nOO.\n.O.\n...");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn json_report_fields() {
        let outcome = raid_outcome();
        let report = Report::from_outcome(&outcome).unwrap();
        let line = encode_report(&report).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["move"], "B1");
        assert_eq!(value["kind"], "Raid");
        assert_eq!(value["score"], 3);
        assert_eq!(value["algorithm"], "ALPHABETA");
        assert_eq!(value["depth"], 1);
        assert_eq!(value["board"][0], "OO.");
        assert_eq!(value["nodes"], outcome.stats.nodes);
    }

    #[test]
    fn no_report_without_move() {
        let root = Position::from_rows(&["O"]).unwrap();
        let config = SearchConfig {
            algorithm: Algorithm::Minimax,
            max_player: Player::O,
            depth: 1,
        };
        let outcome = search(&root, &Weights::uniform(1, 1), &config);
        assert!(Report::from_outcome(&outcome).is_none());
    }
}
