//! Error types for the core data model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core data model and its lookup tables.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A team identifier is not present in the tournament tables.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// A team exists but has no players to pick scorers from.
    #[error("team '{0}' has an empty roster")]
    EmptyRoster(String),

    /// Tournament data failed validation.
    #[error("invalid tournament data: {0}")]
    InvalidData(String),

    /// Tournament data could not be parsed.
    #[error("failed to parse tournament data: {0}")]
    Parse(#[from] serde_json::Error),
}
