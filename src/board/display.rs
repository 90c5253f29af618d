use super::{Board, CELL_COUNT};
use std::fmt;

impl Board {
    /// Renders the board as a 3x3 grid. Each cell shows its top piece
    /// (uppercase for the self side) followed by the stack height when more
    /// than one piece has been placed there; empty cells show their index.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("┌─────┬─────┬─────┐\n");
        for row in 0..3 {
            out.push('│');
            for col in 0..3 {
                let index = row * 3 + col;
                let label = match self.cells[index].top() {
                    Some(piece) if self.cells[index].len() > 1 => {
                        format!("{}{}", piece.to_char(), self.cells[index].len())
                    }
                    Some(piece) => piece.to_char().to_string(),
                    None => format!("({})", index),
                };
                out.push_str(&format!("{:^5}│", label));
            }
            out.push('\n');
            if row < 2 {
                out.push_str("├─────┼─────┼─────┤\n");
            }
        }
        out.push_str("└─────┴─────┴─────┘");
        out
    }

    /// Bottom-to-top stack contents per cell, rows separated by `/` and
    /// cells by `,`. Empty cells are `.`.
    pub fn to_notation(&self) -> String {
        let mut rows = Vec::with_capacity(3);
        for row in self.cells.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        ".".to_string()
                    } else {
                        cell.pieces().iter().map(|piece| piece.to_char()).collect()
                    }
                })
                .collect();
            rows.push(cells.join(","));
        }
        debug_assert_eq!(rows.len() * 3, CELL_COUNT);
        rows.join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::piece::{Piece, Size};
    use crate::board::player::Player;
    use crate::board::Board;

    #[test]
    fn test_to_notation() {
        let mut board = Board::new();
        board.place(0, Piece::new(Player::Opponent, Size::Small)).unwrap();
        board.place(0, Piece::new(Player::Me, Size::Large)).unwrap();
        board.place(4, Piece::new(Player::Opponent, Size::Medium)).unwrap();

        assert_eq!(board.to_notation(), "sL,.,./.,m,./.,.,.");
    }

    #[test]
    fn test_to_ascii_shows_top_piece_and_height() {
        let mut board = Board::new();
        board.place(0, Piece::new(Player::Opponent, Size::Small)).unwrap();
        board.place(0, Piece::new(Player::Me, Size::Large)).unwrap();

        let ascii = board.to_ascii();
        assert!(ascii.contains("L2"));
        assert!(ascii.contains("(8)"));
    }
}
