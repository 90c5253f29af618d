//! Parsing of interactive commands and of the position notation.

pub mod input;
pub mod notation;

pub use input::{parse_command_input, CommandInput, InputError};
pub use notation::{parse_notation, NotationParseError, EMPTY_POSITION_NOTATION};
