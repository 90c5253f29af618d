use super::error::BoardError;
use super::inventory::Inventory;
use super::piece::Piece;
use super::player::Player;
use super::Board;
use crate::evaluate;
use crate::move_generator::{Move, MoveGenerator, MoveList};

/// The material part of a game: board, both inventories and the side to move.
///
/// `apply` never mutates; it derives the successor position. The search
/// relies on this to keep sibling branches independent, and the live game
/// swaps in the derived value only once a move has been validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    inventories: [Inventory; 2],
    turn: Player,
}

impl Position {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            inventories: [Inventory::initial(); 2],
            turn: first,
        }
    }

    /// Assembles a position from parts. The caller is responsible for the
    /// parts satisfying conservation; use `check_conservation` to verify.
    pub fn from_parts(board: Board, inventories: [Inventory; 2], turn: Player) -> Self {
        Self {
            board,
            inventories,
            turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player.index()]
    }

    pub fn inventories(&self) -> &[Inventory; 2] {
        &self.inventories
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Player) -> Player {
        self.turn = turn;
        turn
    }

    pub fn legal_moves(&self) -> MoveList {
        MoveGenerator::generate_moves(&self.board, self.inventory(self.turn))
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        MoveGenerator::is_legal(&self.board, self.inventory(self.turn), mv)
    }

    pub fn winner(&self) -> Option<Player> {
        evaluate::winner(&self.board)
    }

    /// Places a piece of the mover's at the move's cell, takes it from the
    /// mover's inventory and hands the turn over, returning the new position.
    pub fn apply(&self, mv: Move) -> Result<Position, BoardError> {
        let mover = self.turn;
        let mut next = self.clone();
        next.inventories[mover.index()].take(mv.size)?;
        next.board.place(mv.cell, Piece::new(mover, mv.size))?;
        next.turn = mover.opposite();
        Ok(next)
    }

    /// Verifies that for every player and size, pieces in hand plus pieces
    /// on the board add up to the initial count.
    pub fn check_conservation(&self) -> bool {
        Player::ALL.iter().all(|&player| {
            super::piece::ALL_SIZES.iter().all(|&size| {
                self.inventory(player).count(size) + self.board.count(player, size)
                    == Inventory::initial_count(size)
            })
        })
    }
}
