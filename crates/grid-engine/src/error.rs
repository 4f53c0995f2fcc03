use crate::engine::GameStatus;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("unable to move, status is {0}")]
    TerminalState(GameStatus),
    #[error("invalid direction {0:?}; use up, down, left, or right")]
    InvalidDirection(String),
}
