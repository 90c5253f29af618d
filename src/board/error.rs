use thiserror::Error;

use super::piece::Size;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell index {index} is out of range, expected 0..=8")]
    CellOutOfRange { index: usize },
    #[error("Cannot place a {placed} piece over a {covered} piece, it must be strictly larger")]
    StackingViolation { placed: Size, covered: Size },
    #[error("No {size} pieces left in the inventory")]
    InventoryExhausted { size: Size },
}
