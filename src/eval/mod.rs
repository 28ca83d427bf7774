//! Position evaluation.
//!
//! Static scoring used at every depth-zero node of the search. There is no
//! lookahead here: a position is worth the weighted material difference
//! from the maximizing player's point of view.

pub(crate) mod material;

pub use material::score;
