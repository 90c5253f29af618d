use thiserror::Error;

use crate::board::error::BoardError;

/// Reasons a command is refused. A refused command never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },
    #[error("illegal state: {reason}")]
    IllegalState { reason: &'static str },
    #[error("discarded a result computed for an earlier state of the game")]
    StaleAsyncResult,
}

impl From<BoardError> for ControllerError {
    fn from(error: BoardError) -> Self {
        ControllerError::InvalidMove {
            reason: error.to_string(),
        }
    }
}
