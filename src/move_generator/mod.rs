//! Legal move generation.

pub mod generator;
mod placement;

pub use generator::{MoveGenerator, MoveList};
pub use placement::Move;
