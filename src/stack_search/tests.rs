//! Search tests on real positions.
//!
//! Positions use the notation from `input_handler::notation`: rows split by
//! `/`, cells by `,`, uppercase pieces belong to `Me`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;
use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
};
use crate::board::inventory::Inventory;
use crate::board::piece::Size;
use crate::board::player::Player;
use crate::board::{Board, Position};
use crate::evaluate::{CENTER_CONTROL, WIN_SCORE};
use crate::move_generator::Move;

fn position(notation: &str) -> Position {
    notation.parse().unwrap()
}

/// Unpruned minimax with the same conventions as the alpha-beta search.
fn minimax(state: &SearchPosition, depth: u8) -> i16 {
    let evaluator = StackEvaluator;
    if let Some(score) = evaluator.terminal_score(state, depth) {
        return score;
    }
    if depth == 0 {
        return evaluator.evaluate(state);
    }
    let moves = StackMoveGenerator.generate_moves(state);
    if moves.is_empty() {
        return evaluator.no_moves_score(state);
    }
    let scores = moves
        .iter()
        .map(|mv| minimax(&mv.apply(state).unwrap(), depth - 1));
    if state.is_maximizing_player() {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

fn minimax_root(position: &Position, depth: u8) -> (Move, i16) {
    let root = SearchPosition::new(position.clone(), position.turn());
    let mut best: Option<(Move, i16)> = None;
    for mv in position.legal_moves() {
        let score = minimax(&mv.apply(&root).unwrap(), depth - 1);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

/// Positions reached by seeded random play, skipping finished games.
fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let mut current = Position::new(*Player::ALL.choose(&mut rng).unwrap());
        let plies = rng.gen_range(0..=max_plies);
        for _ in 0..plies {
            let moves = current.legal_moves();
            if current.winner().is_some() || moves.is_empty() {
                break;
            }
            let mv = *moves.choose(&mut rng).unwrap();
            current = current.apply(mv).unwrap();
        }
        if current.winner().is_none() && !current.legal_moves().is_empty() {
            positions.push(current);
        }
    }
    positions
}

#[test]
fn test_suggests_line_completing_move() {
    // Me holds the top row's first two cells with both large pieces
    let position = position("L,L,./.,.,./s,s,. me");
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    let outcome = search_best_move(&mut context, &position).unwrap();

    assert_eq!(outcome.best_move, Move::new(2, Size::Medium));
    assert!(outcome.immediate_win);
    assert_eq!(outcome.score, WIN_SCORE + 3);
    assert_eq!(context.last_score(), Some(WIN_SCORE + 3));
}

#[test]
fn test_immediate_win_by_covering() {
    // Me wins by covering the opponent's small piece on the center
    let position = position("M,.,./.,s,./.,.,M me");
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    let outcome = search_best_move(&mut context, &position).unwrap();

    assert_eq!(outcome.best_move, Move::new(4, Size::Large));
    assert!(outcome.immediate_win);
}

#[test]
fn test_search_alone_prefers_the_quickest_win() {
    // Without the shortcut the depth bonus still favors winning right away,
    // although several non-winning candidates are searched before M8
    let position = position("L,.,./.,L,./s,s,. me");
    let root = SearchPosition::new(position.clone(), Player::Me);
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    let result = alpha_beta_search(&mut context, &root, &StackMoveGenerator, &StackEvaluator)
        .unwrap();

    assert_eq!(result.best_move, Move::new(8, Size::Medium));
    assert_eq!(result.score, WIN_SCORE + 3);
}

#[test]
fn test_blocks_opponent_threat() {
    // The opponent threatens to complete the top row on cell 2
    let position = position("m,m,./.,.,./.,.,S me");
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    let outcome = search_best_move(&mut context, &position).unwrap();
    assert!(!outcome.immediate_win);

    let after = position.apply(outcome.best_move).unwrap();
    for reply in after.legal_moves() {
        let next = after.apply(reply).unwrap();
        assert_ne!(
            next.winner(),
            Some(Player::Opponent),
            "{} lets the opponent win with {}",
            outcome.best_move,
            reply
        );
    }
}

#[test]
fn test_ai_side_maximizes_for_itself() {
    // Same shape mirrored: the opponent to move can win on cell 2
    let position = position("l,l,./.,.,./S,S,. opponent");
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    let outcome = search_best_move(&mut context, &position).unwrap();

    assert_eq!(outcome.best_move, Move::new(2, Size::Medium));
    assert!(outcome.immediate_win);
}

#[test]
fn test_ties_keep_first_generated_move() {
    // With the center taken by a large piece, every reply scores the same at depth 1
    let position = position(".,.,./.,l,./.,.,. me");
    let mut context = SearchContext::new(1);

    let outcome = search_best_move(&mut context, &position).unwrap();

    assert_eq!(outcome.best_move, Move::new(0, Size::Large));
    assert_eq!(outcome.score, -CENTER_CONTROL);
}

#[test]
fn test_empty_board_opens_large_in_the_center_at_depth_1() {
    let mut context = SearchContext::new(1);
    let outcome = search_best_move(&mut context, &Position::new(Player::Me)).unwrap();

    assert_eq!(outcome.best_move, Move::new(4, Size::Large));
    assert_eq!(outcome.score, CENTER_CONTROL);
}

#[test]
fn test_no_moves_is_an_error() {
    let position = Position::from_parts(
        Board::new(),
        [Inventory::empty(), Inventory::initial()],
        Player::Me,
    );
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    assert_eq!(
        search_best_move(&mut context, &position),
        Err(SearchError::NoAvailableMoves)
    );
}

#[test]
fn test_search_leaves_position_untouched() {
    let position = position("S,.,./.,m,./.,.,. me");
    let before = position.clone();
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    search_best_move(&mut context, &position).unwrap();

    assert_eq!(position, before);
}

#[test]
fn test_alpha_beta_matches_minimax_on_random_positions() {
    for position in random_positions(7, 12, 8) {
        let mut context = SearchContext::new(3);
        let root = SearchPosition::new(position.clone(), position.turn());
        let result =
            alpha_beta_search(&mut context, &root, &StackMoveGenerator, &StackEvaluator).unwrap();

        let (expected_move, expected_score) = minimax_root(&position, 3);
        assert_eq!(
            (result.best_move, result.score),
            (expected_move, expected_score),
            "mismatch on {}",
            position.to_notation()
        );
    }
}

#[test]
fn test_alpha_beta_matches_minimax_at_full_depth() {
    let positions: Vec<Position> = random_positions(11, 40, 10)
        .into_iter()
        .filter(|p| p.legal_moves().len() <= 16)
        .take(3)
        .collect();
    assert!(!positions.is_empty());

    for position in positions {
        let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);
        let root = SearchPosition::new(position.clone(), position.turn());
        let result =
            alpha_beta_search(&mut context, &root, &StackMoveGenerator, &StackEvaluator).unwrap();

        let (expected_move, expected_score) = minimax_root(&position, DEFAULT_SEARCH_DEPTH);
        assert_eq!(
            (result.best_move, result.score),
            (expected_move, expected_score),
            "mismatch on {}",
            position.to_notation()
        );
    }
}

#[test]
fn test_parallel_root_matches_sequential() {
    for position in random_positions(3, 6, 6) {
        let mut sequential = SearchContext::with_parallel(DEFAULT_SEARCH_DEPTH, false);
        let mut parallel = SearchContext::with_parallel(DEFAULT_SEARCH_DEPTH, true);

        assert_eq!(
            search_best_move(&mut sequential, &position).unwrap(),
            search_best_move(&mut parallel, &position).unwrap(),
            "mismatch on {}",
            position.to_notation()
        );
    }
}

#[test]
fn test_self_play_from_empty_board_terminates() {
    let mut current = Position::new(Player::Me);
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);

    // 16 pieces in total, so at most 16 placements
    for _ in 0..16 {
        if current.winner().is_some() || current.legal_moves().is_empty() {
            break;
        }
        let outcome = search_best_move(&mut context, &current).unwrap();
        current = current.apply(outcome.best_move).unwrap();
        assert!(current.check_conservation());
    }

    assert!(current.winner().is_some() || current.legal_moves().is_empty());
}
