//! Bracket engine for Euro Bracket.
//!
//! Resolves match winners (including penalty shootouts), pairs winners into
//! the next round using the fixed bracket topology, simulates plausible
//! scores and scorers, and keeps the live prediction state for the current
//! round inside an explicit `TournamentSession`.

pub mod bracket;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod session;
pub mod simulate;
pub mod store;

pub use bracket::{advance_round, is_round_complete, match_count, resolve_winner, round_winners};
pub use config::BracketConfig;
pub use error::{BracketError, BracketResult};
pub use history::{History, HistoryEntry};
pub use session::{Progress, TournamentSession};
pub use simulate::MatchSimulator;
pub use store::{MAX_SCORE, PredictionStore};
