//! Generic alpha-beta search for two-player zero-sum games.
//!
//! The search is domain-agnostic: a game plugs in by implementing the
//! traits in [`traits`]. See `stack_search` for this crate's game.

mod search;
mod traits;


pub use search::{alpha_beta_search, SearchContext, SearchError, SearchResult};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

#[cfg(test)]
pub(crate) use search::alpha_beta;
