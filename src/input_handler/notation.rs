use std::str::FromStr;

use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::inventory::Inventory;
use crate::board::piece::{Piece, ALL_SIZES};
use crate::board::player::Player;
use crate::board::{Board, Position};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationParseError {
    #[error("Wrong number of fields, expected `<rows> <side to move>`")]
    WrongNumberOfFields,
    #[error("Wrong number of rows: 3 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Wrong number of cells in row {row:?}: 3 expected, {cell_count:?} given")]
    InvalidCellCount { row: String, cell_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Empty cell in row {row:?}, use `.` for an empty cell")]
    EmptyCell { row: String },
    #[error("Error placing piece: {board_error:?}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Invalid side to move: {invalid_player:?}")]
    InvalidPlayer { invalid_player: String },
    #[error("Too many {size} pieces for {player}")]
    InventoryOverdrawn { player: Player, size: String },
}

type NotationResult<T> = Result<T, NotationParseError>;

pub const EMPTY_POSITION_NOTATION: &str = ".,.,./.,.,./.,.,. me";

/// Parses position notation: three `/`-separated rows of three `,`-separated
/// cells, each cell a bottom-to-top stack of piece letters or `.`, then the
/// side to move. Inventories are whatever the board has not used up.
pub fn parse_notation(notation: &str) -> NotationResult<Position> {
    let parts: Vec<&str> = notation.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(NotationParseError::WrongNumberOfFields);
    }

    let board = parse_board(parts[0])?;
    let turn = parse_turn(parts[1])?;
    let inventories = derive_inventories(&board)?;

    Ok(Position::from_parts(board, inventories, turn))
}

fn parse_board(rows_field: &str) -> NotationResult<Board> {
    let rows: Vec<&str> = rows_field.split('/').collect();
    if rows.len() != 3 {
        return Err(NotationParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    let mut board = Board::new();
    for (row_index, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.split(',').collect();
        if cells.len() != 3 {
            return Err(NotationParseError::InvalidCellCount {
                row: row.to_string(),
                cell_count: cells.len(),
            });
        }

        for (col_index, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                return Err(NotationParseError::EmptyCell {
                    row: row.to_string(),
                });
            }
            if *cell == "." {
                continue;
            }
            for c in cell.chars() {
                let piece = Piece::from_char(c).ok_or(
                    NotationParseError::InvalidPieceCharacter {
                        invalid_character: c,
                    },
                )?;
                board
                    .place(row_index * 3 + col_index, piece)
                    .map_err(|board_error| NotationParseError::ErrorPlacingPiece { board_error })?;
            }
        }
    }

    Ok(board)
}

fn parse_turn(turn_field: &str) -> NotationResult<Player> {
    match turn_field {
        "me" => Ok(Player::Me),
        "opponent" => Ok(Player::Opponent),
        _ => Err(NotationParseError::InvalidPlayer {
            invalid_player: turn_field.to_string(),
        }),
    }
}

fn derive_inventories(board: &Board) -> NotationResult<[Inventory; 2]> {
    let mut inventories = [Inventory::empty(); 2];
    for &player in Player::ALL.iter() {
        let mut counts = [0u8; 3];
        for &size in ALL_SIZES.iter() {
            counts[size.index()] = Inventory::initial_count(size)
                .checked_sub(board.count(player, size))
                .ok_or(NotationParseError::InventoryOverdrawn {
                    player,
                    size: size.to_string(),
                })?;
        }
        inventories[player.index()] = Inventory::with_counts(counts[0], counts[1], counts[2]);
    }
    Ok(inventories)
}

impl FromStr for Position {
    type Err = NotationParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_notation(notation)
    }
}

impl Position {
    pub fn to_notation(&self) -> String {
        format!("{} {}", self.board().to_notation(), self.turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Size;

    #[test]
    fn test_parse_empty_position() {
        let position = parse_notation(EMPTY_POSITION_NOTATION).unwrap();
        assert_eq!(position, Position::new(Player::Me));
    }

    #[test]
    fn test_parse_stacks_and_derive_inventories() {
        let position: Position = "sL,.,./.,m,./.,.,. opponent".parse().unwrap();

        assert_eq!(position.turn(), Player::Opponent);
        assert_eq!(
            position.board().top_piece(0),
            Some(Piece::new(Player::Me, Size::Large))
        );
        assert_eq!(position.board().cell(0).unwrap().len(), 2);
        assert_eq!(position.inventory(Player::Me).count(Size::Large), 1);
        assert_eq!(position.inventory(Player::Opponent).count(Size::Small), 2);
        assert_eq!(position.inventory(Player::Opponent).count(Size::Medium), 2);
        assert!(position.check_conservation());
    }

    #[test]
    fn test_round_trip() {
        let notation = "sL,.,S/.,m,./l,.,M me";
        let position: Position = notation.parse().unwrap();
        assert_eq!(position.to_notation(), notation);
    }

    #[test]
    fn test_rejects_stacking_violation() {
        let result = parse_notation("Ls,.,./.,.,./.,.,. me");
        assert!(matches!(
            result,
            Err(NotationParseError::ErrorPlacingPiece { .. })
        ));
    }

    #[test]
    fn test_rejects_overdrawn_inventory() {
        let result = parse_notation("L,L,L/.,.,./.,.,. me");
        assert_eq!(
            result,
            Err(NotationParseError::InventoryOverdrawn {
                player: Player::Me,
                size: "large".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_malformed_notation() {
        assert_eq!(
            parse_notation(".,.,./.,.,. me"),
            Err(NotationParseError::InvalidRowCount { row_count: 2 })
        );
        assert_eq!(
            parse_notation(".,.,./.,.,./.,.,."),
            Err(NotationParseError::WrongNumberOfFields)
        );
        assert!(matches!(
            parse_notation(".,.,./.,x,./.,.,. me"),
            Err(NotationParseError::InvalidPieceCharacter {
                invalid_character: 'x'
            })
        ));
        assert_eq!(
            parse_notation(".,.,./,,/.,.,. me"),
            Err(NotationParseError::EmptyCell {
                row: ",,".to_string()
            })
        );
        assert!(matches!(
            parse_notation(".,.,./.,.,./.,.,. white"),
            Err(NotationParseError::InvalidPlayer { .. })
        ));
    }
}
