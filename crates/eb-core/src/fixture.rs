//! Matches, sides, and goal scorers.

use serde::{Deserialize, Serialize};

use crate::teams::TeamId;

/// Which side of a fixture a score or scorer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first-listed team.
    Home,
    /// The second-listed team.
    Away,
}

impl Side {
    /// Parse a side from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" | "h" | "local" => Some(Self::Home),
            "away" | "a" | "visitante" => Some(Self::Away),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

/// A goal attributed to a player at a given minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    /// Player name from the team roster.
    pub player: String,
    /// Minute of the goal (1-90).
    pub minute: u32,
}

impl std::fmt::Display for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}')", self.player, self.minute)
    }
}

/// One fixture within a round.
///
/// Scores stay `None` until predicted or simulated. Penalties are only
/// meaningful when the regulation scores are level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Home team identifier.
    pub home_team: TeamId,
    /// Away team identifier (empty until the previous round resolves).
    pub away_team: TeamId,
    /// Home regulation score.
    pub home_score: Option<u32>,
    /// Away regulation score.
    pub away_score: Option<u32>,
    /// Home shootout score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_penalties: Option<u32>,
    /// Away shootout score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_penalties: Option<u32>,
    /// Home goal scorers, one per home goal.
    #[serde(default)]
    pub home_scorers: Vec<Scorer>,
    /// Away goal scorers, one per away goal.
    #[serde(default)]
    pub away_scorers: Vec<Scorer>,
}

impl Match {
    /// Create an unplayed fixture between two teams.
    pub fn new(home: impl Into<TeamId>, away: impl Into<TeamId>) -> Self {
        Self {
            home_team: home.into(),
            away_team: away.into(),
            ..Self::default()
        }
    }

    /// The team playing on the given side.
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// The regulation score of the given side.
    pub fn score(&self, side: Side) -> Option<u32> {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// The scorers of the given side.
    pub fn scorers(&self, side: Side) -> &[Scorer] {
        match side {
            Side::Home => &self.home_scorers,
            Side::Away => &self.away_scorers,
        }
    }

    /// Set one side's score together with its scorer list.
    ///
    /// The other side is left untouched.
    pub fn set_side(&mut self, side: Side, score: Option<u32>, scorers: Vec<Scorer>) {
        match side {
            Side::Home => {
                self.home_score = score;
                self.home_scorers = scorers;
            }
            Side::Away => {
                self.away_score = score;
                self.away_scorers = scorers;
            }
        }
    }

    /// Both penalty counts, if a shootout was recorded.
    pub fn penalties(&self) -> Option<(u32, u32)> {
        self.home_penalties.zip(self.away_penalties)
    }

    /// Record (or clear) a shootout result.
    pub fn set_penalties(&mut self, penalties: Option<(u32, u32)>) {
        self.home_penalties = penalties.map(|(h, _)| h);
        self.away_penalties = penalties.map(|(_, a)| a);
    }

    /// Whether both regulation scores are set.
    pub fn is_complete(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// Whether the match is complete and level after regulation.
    pub fn is_tied(&self) -> bool {
        self.is_complete() && self.home_score == self.away_score
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => {
                write!(f, "{} {h} - {a} {}", self.home_team, self.away_team)?;
                if let Some((hp, ap)) = self.penalties() {
                    write!(f, " (pens {hp}-{ap})")?;
                }
                Ok(())
            }
            _ => write!(f, "{} vs {}", self.home_team, self.away_team),
        }
    }
}
