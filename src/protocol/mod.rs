//! Setup and result encoding.
//!
//! Parses the line-oriented setup file (or its JSON equivalent) into a
//! validated `GameSetup`, and serializes a chosen move with its resulting
//! board.

pub mod input;
pub mod output;

pub use input::{parse_setup, parse_setup_json, GameSetup, SetupError};
pub use output::{encode_report, format_result, OutputFormat, Report};
