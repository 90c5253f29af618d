//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same move
//! and score as minimax over the same depth and move ordering, but explores fewer nodes.
//!
//! Every node first asks the evaluator whether the game is already decided; decided scores are
//! adjusted by the remaining depth so the engine prefers quick wins and slow losses. At the
//! horizon the static evaluation is used, and an undecided node without legal moves is scored
//! by `Evaluator::no_moves_score`.
//!
//! Among equally scored moves the first one in generation order is kept: best scores are only
//! replaced on a strict improvement.
//!
//! ## Parallel Search
//! Root moves can be searched in parallel. Each root child is then searched with the full
//! window, and the first strictly best move in generation order is selected afterwards, so the
//! result matches the sequential search.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("move application failed: {msg}")]
    MoveApplicationFailed { msg: String },
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    parallel: bool,
}

impl SearchConfig {
    fn new(depth: u8, parallel: bool) -> Self {
        Self { depth, parallel }
    }
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoff_count: AtomicUsize,
    last_score: Option<i16>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoff_count: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.cutoff_count.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.cutoff_count.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, score: i16, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::SeqCst)
    }

    fn cutoffs(&self) -> usize {
        self.cutoff_count.load(Ordering::SeqCst)
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_parallel(depth, false)
    }

    pub fn with_parallel(depth: u8, parallel: bool) -> Self {
        Self {
            config: SearchConfig::new(depth, parallel),
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn last_score(&self) -> Option<i16> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    /// Records the outcome of a search that was settled without running the
    /// tree search, so the statistics still describe the latest decision.
    pub fn record_result(&mut self, score: i16, duration: Duration) {
        self.stats.record_result(score, duration);
    }

    fn increment_position_count(&self) {
        self.stats.increment();
    }

    fn increment_cutoffs(&self) {
        self.stats.increment_cutoffs();
    }
}

/// Best root move and its minimax score.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: i16,
}

fn derive_state<S, M>(game_move: &M, state: &S) -> Result<S, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
{
    game_move
        .apply(state)
        .map_err(|error| SearchError::MoveApplicationFailed {
            msg: format!("{:?}", error),
        })
}

/// Updates best score and move if new score is strictly better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i16,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i16,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better || best_move.is_none() {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Searches for the best move using depth-bounded alpha-beta pruning.
///
/// # Returns
///
/// - `Ok(result)` - The best move found at the configured depth, with its score
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves available
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
) -> Result<SearchResult<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::MoveList: Sync,
    E: Evaluator<S>,
{
    let target_depth = context.search_depth();
    debug!("alpha-beta search depth: {}", target_depth);

    if target_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    let maximizing = state.is_maximizing_player();
    let candidates = move_generator.generate_moves(state);

    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mut best_move = None;
    let mut best_score = if maximizing { i16::MIN } else { i16::MAX };

    if context.is_parallel() {
        let shared: &SearchContext = context;
        let scores = candidates
            .as_ref()
            .par_iter()
            .map(|candidate| {
                let child = derive_state(candidate, state)?;
                alpha_beta(
                    shared,
                    &child,
                    target_depth - 1,
                    i16::MIN,
                    i16::MAX,
                    move_generator,
                    evaluator,
                )
            })
            .collect::<Result<Vec<i16>, SearchError>>()?;

        for (candidate, &score) in candidates.as_ref().iter().zip(scores.iter()) {
            update_best(score, candidate, maximizing, &mut best_score, &mut best_move);
        }
    } else {
        let mut alpha = i16::MIN;
        let mut beta = i16::MAX;

        for candidate in candidates.as_ref().iter() {
            let child = derive_state(candidate, state)?;
            let score = alpha_beta(
                context,
                &child,
                target_depth - 1,
                alpha,
                beta,
                move_generator,
                evaluator,
            )?;
            update_best(score, candidate, maximizing, &mut best_score, &mut best_move);

            if maximizing {
                alpha = max(alpha, best_score);
            } else {
                beta = min(beta, best_score);
            }
        }
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    let duration = start.elapsed();
    context.record_result(best_score, duration);
    debug!(
        "best move {:?} scored {} after {} positions, {} cutoffs, {:?}",
        best_move,
        best_score,
        context.searched_position_count(),
        context.cutoff_count(),
        duration
    );

    Ok(SearchResult {
        best_move,
        score: best_score,
    })
}

/// Minimax value of `state` searched to `depth` plies, pruning branches that
/// cannot influence the result once `beta <= alpha`.
pub(crate) fn alpha_beta<S, G, E>(
    context: &SearchContext,
    state: &S,
    depth: u8,
    mut alpha: i16,
    mut beta: i16,
    move_generator: &G,
    evaluator: &E,
) -> Result<i16, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state, depth) {
        return Ok(score);
    }

    if depth == 0 {
        return Ok(evaluator.evaluate(state));
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Ok(evaluator.no_moves_score(state));
    }

    if state.is_maximizing_player() {
        let mut best_score = i16::MIN;
        for candidate in candidates.as_ref().iter() {
            let child = derive_state(candidate, state)?;
            let score = alpha_beta(
                context,
                &child,
                depth - 1,
                alpha,
                beta,
                move_generator,
                evaluator,
            )?;
            best_score = max(best_score, score);
            alpha = max(alpha, best_score);
            if beta <= alpha {
                context.increment_cutoffs();
                break;
            }
        }
        Ok(best_score)
    } else {
        let mut best_score = i16::MAX;
        for candidate in candidates.as_ref().iter() {
            let child = derive_state(candidate, state)?;
            let score = alpha_beta(
                context,
                &child,
                depth - 1,
                alpha,
                beta,
                move_generator,
                evaluator,
            )?;
            best_score = min(best_score, score);
            beta = min(beta, best_score);
            if beta <= alpha {
                context.increment_cutoffs();
                break;
            }
        }
        Ok(best_score)
    }
}
