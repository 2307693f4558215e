use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Malformed state list: {0}")]
    MalformedState(StateDefect),
    #[error("Board dimensions do not hold the same number of cells")]
    GridSizeMismatch,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// What exactly is wrong with a rejected state list.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateDefect {
    #[error("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("unknown state tag {tag} at cell {index}")]
    UnknownTag { index: CellIndex, tag: u8 },
}

pub type Result<T> = core::result::Result<T, GameError>;
