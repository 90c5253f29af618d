use std::fmt;

use crate::board::piece::Size;

/// Intent to place a piece of `size`, owned by the side to move, on `cell`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub cell: usize,
    pub size: Size,
}

impl Move {
    pub fn new(cell: usize, size: Size) -> Self {
        Self { cell, size }
    }
}

impl fmt::Display for Move {
    /// `L4` is a large piece on the center cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.size.to_char(), self.cell)
    }
}
