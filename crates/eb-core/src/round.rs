//! Bracket rounds.
//!
//! The bracket has four fixed stages. Each stage has a fixed number of
//! matches and at most one successor; the only way back to the first round
//! is a full restart.

use serde::{Deserialize, Serialize};

/// One stage of the single-elimination bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Round {
    /// Round of 16 (8 matches).
    RoundOf16,
    /// Quarterfinals (4 matches).
    Quarterfinals,
    /// Semifinals (2 matches).
    Semifinals,
    /// Final (1 match).
    Final,
}

impl Round {
    /// All rounds in bracket order.
    pub fn all() -> &'static [Self] {
        &[
            Self::RoundOf16,
            Self::Quarterfinals,
            Self::Semifinals,
            Self::Final,
        ]
    }

    /// Number of matches played in this round.
    pub fn match_count(self) -> usize {
        match self {
            Self::RoundOf16 => 8,
            Self::Quarterfinals => 4,
            Self::Semifinals => 2,
            Self::Final => 1,
        }
    }

    /// The round that follows this one, or `None` after the final.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::RoundOf16 => Some(Self::Quarterfinals),
            Self::Quarterfinals => Some(Self::Semifinals),
            Self::Semifinals => Some(Self::Final),
            Self::Final => None,
        }
    }

    /// Whether this is the last round of the bracket.
    pub fn is_final(self) -> bool {
        self == Self::Final
    }

    /// Localized (Spanish) round title shown above the fixtures.
    pub fn localized_title(self) -> &'static str {
        match self {
            Self::RoundOf16 => "Octavos",
            Self::Quarterfinals => "Cuartos de final",
            Self::Semifinals => "Semifinales",
            Self::Final => "Final",
        }
    }

    /// Localized label for the action that leaves this round.
    pub fn advance_label(self) -> &'static str {
        match self {
            Self::RoundOf16 => "Avanzar a cuartos",
            Self::Quarterfinals => "Avanzar a semifinales",
            Self::Semifinals => "Avanzar a la final",
            Self::Final => "Finalizar torneo",
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundOf16 => write!(f, "Round of 16"),
            Self::Quarterfinals => write!(f, "Quarterfinals"),
            Self::Semifinals => write!(f, "Semifinals"),
            Self::Final => write!(f, "Final"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_counts_are_fixed() {
        assert_eq!(Round::RoundOf16.match_count(), 8);
        assert_eq!(Round::Quarterfinals.match_count(), 4);
        assert_eq!(Round::Semifinals.match_count(), 2);
        assert_eq!(Round::Final.match_count(), 1);
    }

    #[test]
    fn progression_is_forward_only() {
        assert_eq!(Round::RoundOf16.next(), Some(Round::Quarterfinals));
        assert_eq!(Round::Quarterfinals.next(), Some(Round::Semifinals));
        assert_eq!(Round::Semifinals.next(), Some(Round::Final));
        assert_eq!(Round::Final.next(), None);
    }

    #[test]
    fn each_round_halves_the_field() {
        for pair in Round::all().windows(2) {
            assert_eq!(pair[0].match_count(), pair[1].match_count() * 2);
        }
    }

    #[test]
    fn localized_labels() {
        assert_eq!(Round::RoundOf16.localized_title(), "Octavos");
        assert_eq!(Round::Final.advance_label(), "Finalizar torneo");
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&Round::RoundOf16).unwrap();
        assert_eq!(json, "\"roundOf16\"");
        let back: Round = serde_json::from_str("\"semifinals\"").unwrap();
        assert_eq!(back, Round::Semifinals);
    }
}
