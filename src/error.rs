//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is outside the 3x3 board")]
    InvalidMove { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("no legal move: position is terminal")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,

    #[error("invalid board string '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },

    #[error("invalid strategy '{input}' (expected 'minimax' or 'alpha-beta')")]
    ParseStrategy { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
