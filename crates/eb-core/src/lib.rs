//! Core types for Euro Bracket.
//!
//! This crate defines the knockout bracket data model: rounds, matches,
//! goal scorers, the per-round prediction set, and the static, versioned
//! tournament tables (seed pairings, localized team names, flags, rosters).

pub mod error;
pub mod fixture;
pub mod prediction;
pub mod round;
pub mod teams;

pub use error::{CoreError, CoreResult};
pub use fixture::{Match, Scorer, Side};
pub use prediction::PredictionSet;
pub use round::Round;
pub use teams::{SeedPairing, TeamId, TeamInfo, TournamentData};
