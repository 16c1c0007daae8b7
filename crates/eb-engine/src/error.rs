//! Error types for the bracket engine.

use eb_core::{CoreError, Round};
use thiserror::Error;

/// Result type for bracket operations.
pub type BracketResult<T> = Result<T, BracketError>;

/// Errors that can occur while predicting or advancing the bracket.
#[derive(Debug, Error)]
pub enum BracketError {
    /// A match has no winner: scores are missing, or the scores are level
    /// without a decisive shootout.
    #[error("indeterminate match: {0}")]
    Indeterminate(String),

    /// Not every match of the round has both scores set.
    #[error("not all {0} scores are set")]
    RoundIncomplete(Round),

    /// The final has no next round to pair into.
    #[error("the final has no next round")]
    NoNextRound,

    /// The requested slot does not exist in the current round.
    #[error("no match {slot} in the {round}")]
    SlotNotFound {
        /// Round being played.
        round: Round,
        /// Zero-based slot index.
        slot: usize,
    },

    /// The champion is decided; only a restart is possible.
    #[error("the tournament is over, restart to play again")]
    TournamentFinished,

    /// A score could not be accepted.
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// A shootout result could not be accepted.
    #[error("invalid penalties: {0}")]
    InvalidPenalties(String),

    /// Invalid command usage.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Data table or lookup error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// JSON export failed.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
