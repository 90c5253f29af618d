use log::info;

use crate::board::inventory::Inventory;
use crate::board::player::Player;
use crate::board::{Board, Position};
use crate::evaluate::{self, GameEnding};
use crate::move_generator::Move;

use super::error::ControllerError;

/// The live game: position plus result. Once `winner` is set the game is
/// over and no further move is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    winner: Option<GameEnding>,
}

impl GameState {
    pub fn new(first: Player) -> Self {
        Self::from_position(Position::new(first))
    }

    /// Starts from an arbitrary position; a position that is already won is
    /// over immediately.
    pub fn from_position(position: Position) -> Self {
        let winner = position.winner().map(GameEnding::Win);
        Self { position, winner }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        self.position.inventory(player)
    }

    pub fn turn(&self) -> Player {
        self.position.turn()
    }

    pub fn winner(&self) -> Option<GameEnding> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Validates `mv` for `player` against the current position and applies
    /// it. The winner is recomputed; the turn only passes if nobody won.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), ControllerError> {
        if self.is_over() {
            return Err(ControllerError::IllegalState {
                reason: "the game is over",
            });
        }

        if player != self.turn() {
            return Err(ControllerError::InvalidMove {
                reason: format!("it is not {}'s turn", player),
            });
        }

        if !self.position.is_legal(mv) {
            return Err(ControllerError::InvalidMove {
                reason: format!("{} is not legal for {}", mv, player),
            });
        }

        let mut next = self.position.apply(mv)?;
        if let Some(winner) = next.winner() {
            next.set_turn(player);
            self.winner = Some(GameEnding::Win(winner));
            info!("{} wins with {}", winner, mv);
        }
        self.position = next;
        Ok(())
    }

    /// Ends the game in a draw if the side to move cannot move. Returns true
    /// if the game was drawn by this call.
    pub fn check_for_draw(&mut self) -> bool {
        if self.is_over() || evaluate::game_ending(&self.position) != Some(GameEnding::Draw) {
            return false;
        }
        info!("{} has no legal move, the game is drawn", self.turn());
        self.winner = Some(GameEnding::Draw);
        true
    }
}
