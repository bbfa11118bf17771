//! Error types for the game.
//!
//! Only two conditions are part of the game itself: an unknown player type
//! (rejected before a match starts) and an unrecognised roll/hold token
//! (recovered inside the human turn by re-prompting). The remaining variants
//! cover the input stream going away underneath an interactive player.

use thiserror::Error;

/// Errors produced while configuring or playing a match.
#[derive(Debug, Error)]
pub enum PigError {
    #[error("unknown player type '{0}' (expected 'human' or 'computer')")]
    UnknownPlayerKind(String),

    #[error("invalid choice '{0}': enter 'r' to roll or 'h' to hold")]
    InvalidDecision(String),

    #[error("input closed before the turn finished")]
    InputClosed,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PigError>;
