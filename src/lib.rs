//! Stake and Raid move finder.
//!
//! Exposes the board representation, move rules, evaluation, search and
//! setup protocol for use by the binaries, integration tests and
//! benchmarks.

pub mod analysis;
pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
