pub mod cell;
pub mod error;
pub mod inventory;
pub mod piece;
pub mod player;
pub mod position;

mod display;

use cell::Cell;
use error::BoardError;
use piece::{Piece, Size};
use player::Player;

pub use position::Position;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;

/// The 8 fixed winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 board, cells indexed 0-8 in row-major order:
///
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn top_piece(&self, index: usize) -> Option<Piece> {
        self.cell(index).and_then(Cell::top)
    }

    /// True iff no piece has been placed anywhere.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn can_place(&self, index: usize, size: Size) -> bool {
        match self.top_piece(index) {
            Some(top) => size > top.size,
            None => index < CELL_COUNT,
        }
    }

    pub fn place(&mut self, index: usize, piece: Piece) -> Result<(), BoardError> {
        self.cells
            .get_mut(index)
            .ok_or(BoardError::CellOutOfRange { index })?
            .push(piece)
    }

    /// Number of pieces of the given owner and size anywhere on the board,
    /// covered pieces included.
    pub fn count(&self, owner: Player, size: Size) -> u8 {
        self.cells
            .iter()
            .flat_map(|cell| cell.pieces())
            .filter(|piece| piece.owner == owner && piece.size == size)
            .count() as u8
    }
}
