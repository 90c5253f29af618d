use crate::board::player::Player;
use crate::board::{Board, Position, CENTER, WINNING_LINES};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

pub use self::weights::{CENTER_CONTROL, DRAW_SCORE, OPPONENT_THREAT, OWN_THREAT, WIN_SCORE};

mod weights;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win(Player),
    Draw,
}

/// Returns the owner of the first winning line whose three cells are all
/// occupied with top pieces of the same owner.
#[inline(always)]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|line| {
        let owner = board.top_piece(line[0])?.owner;
        let completes = line[1..]
            .iter()
            .all(|&index| board.top_piece(index).map(|piece| piece.owner) == Some(owner));
        completes.then_some(owner)
    })
}

/// Returns the game ending if the game has ended, otherwise returns None.
/// A position without a winner where the side to move has no legal move is
/// a draw, whatever the board looks like.
pub fn game_ending(position: &Position) -> Option<GameEnding> {
    if let Some(player) = position.winner() {
        return Some(GameEnding::Win(player));
    }

    if position.legal_moves().is_empty() {
        return Some(GameEnding::Draw);
    }

    None
}

/// Static evaluation of the board from `perspective`'s point of view.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn score(board: &Board, perspective: Player) -> i16 {
    match winner(board) {
        Some(player) if player == perspective => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    center_score(board, perspective) + threat_score(board, perspective)
}

#[inline(always)]
fn center_score(board: &Board, perspective: Player) -> i16 {
    match board.top_piece(CENTER) {
        Some(piece) if piece.owner == perspective => CENTER_CONTROL,
        Some(_) => -CENTER_CONTROL,
        None => 0,
    }
}

/// A threat is a line holding two top pieces of one owner and one empty cell.
#[inline(always)]
fn threat_score(board: &Board, perspective: Player) -> i16 {
    let mut score = 0;

    for line in WINNING_LINES.iter() {
        let mut own = 0;
        let mut theirs = 0;
        let mut empty = 0;
        for &index in line.iter() {
            match board.top_piece(index) {
                Some(piece) if piece.owner == perspective => own += 1,
                Some(_) => theirs += 1,
                None => empty += 1,
            }
        }

        if own == 2 && empty == 1 {
            score += OWN_THREAT;
        }
        if theirs == 2 && empty == 1 {
            score -= OPPONENT_THREAT;
        }
    }

    score
}
