//! Move generation.
//!
//! Generation order is significant: the search keeps the first of several
//! equally scored moves, so candidates are produced by descending size, and
//! by ascending cell index within a size.

use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::inventory::Inventory;
use crate::board::piece::SIZES_DESCENDING;
use crate::board::{Board, Position, CELL_COUNT};

use super::placement::Move;

/// At most 9 cells x 3 sizes.
pub type MoveList = SmallVec<[Move; 27]>;

#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    /// A move is legal iff the mover still holds a piece of that size and the
    /// target cell is empty or topped by a strictly smaller piece.
    #[inline]
    pub fn is_legal(board: &Board, inventory: &Inventory, mv: Move) -> bool {
        inventory.has(mv.size) && board.can_place(mv.cell, mv.size)
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn generate_moves(board: &Board, inventory: &Inventory) -> MoveList {
        let mut moves = MoveList::new();
        for &size in SIZES_DESCENDING.iter() {
            if !inventory.has(size) {
                continue;
            }
            for cell in 0..CELL_COUNT {
                if board.can_place(cell, size) {
                    moves.push(Move::new(cell, size));
                }
            }
        }
        moves
    }

    /// Counts the leaf positions reachable in exactly `depth` plies, stopping
    /// early along lines that end in a win or run out of moves.
    pub fn count_positions(position: &Position, depth: u8) -> usize {
        if depth == 0 || position.winner().is_some() {
            return 1;
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return 1;
        }

        moves
            .iter()
            .filter_map(|&mv| position.apply(mv).ok())
            .map(|next| Self::count_positions(&next, depth - 1))
            .sum()
    }
}
