//! Game-specific trait implementations for the alpha-beta search.

use std::time::Instant;

use log::debug;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
};
use crate::board::error::BoardError;
use crate::board::player::Player;
use crate::board::Position;
use crate::evaluate::{self, DRAW_SCORE, WIN_SCORE};
use crate::move_generator::{Move, MoveList};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

/// Plies searched for both AI moves and suggestions.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// A position as seen by the search: the side that started the search is
/// always the maximizer, and every score is from its point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPosition {
    position: Position,
    maximizer: Player,
}

impl SearchPosition {
    pub fn new(position: Position, maximizer: Player) -> Self {
        Self {
            position,
            maximizer,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }
}

impl GameState for SearchPosition {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.position.turn() == self.maximizer
    }
}

impl GameMove for Move {
    type State = SearchPosition;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &SearchPosition) -> Result<SearchPosition, BoardError> {
        Ok(SearchPosition {
            position: state.position.apply(*self)?,
            maximizer: state.maximizer,
        })
    }
}

#[derive(Clone, Copy, Default)]
pub struct StackMoveGenerator;

impl MoveGenerator<SearchPosition> for StackMoveGenerator {
    type Move = Move;
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self, state: &SearchPosition) -> MoveList {
        state.position.legal_moves()
    }
}

#[derive(Clone, Copy, Default)]
pub struct StackEvaluator;

impl Evaluator<SearchPosition> for StackEvaluator {
    #[inline]
    fn terminal_score(&self, state: &SearchPosition, remaining_depth: u8) -> Option<i16> {
        let winner = state.position.winner()?;
        let bonus = remaining_depth as i16;
        if winner == state.maximizer {
            Some(WIN_SCORE + bonus)
        } else {
            Some(-WIN_SCORE - bonus)
        }
    }

    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, state: &SearchPosition) -> i16 {
        evaluate::score(state.position.board(), state.maximizer)
    }

    #[inline]
    fn no_moves_score(&self, _state: &SearchPosition) -> i16 {
        DRAW_SCORE
    }
}

/// The move chosen for the side to move, with its score from that side's
/// point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub score: i16,
    /// The move wins on the spot; it was found without running the tree search.
    pub immediate_win: bool,
}

/// Searches for the best move for the side to move in `position`.
///
/// A move that wins immediately is returned straight away. Otherwise the
/// depth-bounded alpha-beta search decides.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    position: &Position,
) -> Result<SearchOutcome, SearchError> {
    let start = Instant::now();
    let root = SearchPosition::new(position.clone(), position.turn());
    let candidates = position.legal_moves();

    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    if let Some(winning_move) = find_immediate_win(&root, &candidates) {
        let remaining_depth = context.search_depth().saturating_sub(1);
        let score = WIN_SCORE + remaining_depth as i16;
        context.reset_stats();
        context.record_result(score, start.elapsed());
        debug!("immediate win available: {}", winning_move);
        return Ok(SearchOutcome {
            best_move: winning_move,
            score,
            immediate_win: true,
        });
    }

    let result = alpha_beta_search(context, &root, &StackMoveGenerator, &StackEvaluator)?;

    Ok(SearchOutcome {
        best_move: result.best_move,
        score: result.score,
        immediate_win: false,
    })
}

/// First move, in generation order, that completes a line for the mover.
fn find_immediate_win(root: &SearchPosition, candidates: &MoveList) -> Option<Move> {
    candidates.iter().copied().find(|mv| {
        root.position
            .apply(*mv)
            .map(|next| next.winner() == Some(root.maximizer))
            .unwrap_or(false)
    })
}
