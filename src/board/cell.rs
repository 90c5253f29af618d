use smallvec::SmallVec;

use super::error::BoardError;
use super::piece::Piece;

/// A stack of pieces on one board position. Pieces are only ever appended,
/// and each appended piece is strictly larger than the one below it, so a
/// stack never holds more than three pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    stack: SmallVec<[Piece; 3]>,
}

impl Cell {
    pub fn new() -> Self {
        Default::default()
    }

    /// The only piece visibly occupying the cell.
    pub fn top(&self) -> Option<Piece> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Bottom-to-top view of the stack.
    pub fn pieces(&self) -> &[Piece] {
        &self.stack
    }

    pub fn can_accept(&self, piece: Piece) -> bool {
        self.top().map_or(true, |top| piece.size > top.size)
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), BoardError> {
        if let Some(top) = self.top() {
            if piece.size <= top.size {
                return Err(BoardError::StackingViolation {
                    placed: piece.size,
                    covered: top.size,
                });
            }
        }
        self.stack.push(piece);
        Ok(())
    }
}
