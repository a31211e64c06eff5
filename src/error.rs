//! Error types for the rules engine
//!
//! Illegal moves are not errors: they come back as a [`crate::Verdict`].
//! Errors are reserved for calls the caller should never have made.

use thiserror::Error;

use crate::board::{Pos, BOARD_SIZE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("point ({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: i32, col: i32 },

    #[error("intersection {0} is already occupied")]
    AlreadyOccupied(Pos),

    #[error("invalid board text at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid rule configuration: {0}")]
    Config(String),
}

pub type Result<T> = core::result::Result<T, RuleError>;
