use std::time::Duration;

use log::debug;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::Position;
use crate::stack_search::{search_best_move, SearchOutcome, DEFAULT_SEARCH_DEPTH};

/// Search configuration shared by every search the game runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Total plies, counting the root move.
    pub search_depth: u8,
    /// Search root moves on the rayon pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            parallel: false,
        }
    }
}

/// Owns a search context and answers "what is the best move here?".
pub struct Engine {
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            search_context: SearchContext::with_parallel(config.search_depth, config.parallel),
        }
    }

    /// Best move for the side to move in `position`. The position itself is
    /// never modified.
    pub fn best_move(&mut self, position: &Position) -> Result<SearchOutcome, SearchError> {
        let outcome = search_best_move(&mut self.search_context, position)?;
        debug!(
            "{} to play {} (score {}, {} positions)",
            position.turn(),
            outcome.best_move,
            outcome.score,
            self.search_context.searched_position_count()
        );
        Ok(outcome)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}
