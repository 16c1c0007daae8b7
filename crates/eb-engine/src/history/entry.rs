//! History entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eb_core::{Match, Round, TeamId};

/// A single event in the tournament history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A round was completed and its winners advanced.
    RoundPlayed {
        /// The round that was played.
        round: Round,
        /// Final state of every fixture, in slot order.
        matches: Vec<Match>,
        /// Winners in slot order.
        winners: Vec<TeamId>,
        /// When the round was closed.
        timestamp: DateTime<Utc>,
    },
    /// The simulator filled in a whole round.
    RoundSimulated {
        /// The simulated round.
        round: Round,
        /// When the simulation ran.
        timestamp: DateTime<Utc>,
    },
    /// The final was resolved.
    Champion {
        /// Winning team identifier.
        team: TeamId,
        /// When the title was decided.
        timestamp: DateTime<Utc>,
    },
    /// The bracket was reset to the seed pairings.
    Restarted {
        /// When the restart happened.
        timestamp: DateTime<Utc>,
    },
}

impl HistoryEntry {
    /// When this entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::RoundPlayed { timestamp, .. }
            | Self::RoundSimulated { timestamp, .. }
            | Self::Champion { timestamp, .. }
            | Self::Restarted { timestamp } => *timestamp,
        }
    }
}
