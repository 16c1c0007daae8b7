//! The live set of predictions for the current round.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fixture::Match;

/// Mapping from zero-based slot index to the fixture played in that slot.
///
/// Slots are ordered and, for a well-formed round, dense from 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionSet {
    slots: BTreeMap<usize, Match>,
}

impl PredictionSet {
    /// Create an empty prediction set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from fixtures in slot order, numbering them from 0.
    pub fn from_matches(matches: impl IntoIterator<Item = Match>) -> Self {
        Self {
            slots: matches.into_iter().enumerate().collect(),
        }
    }

    /// The fixture in a slot.
    pub fn get(&self, slot: usize) -> Option<&Match> {
        self.slots.get(&slot)
    }

    /// Mutable access to the fixture in a slot.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Match> {
        self.slots.get_mut(&slot)
    }

    /// Put a fixture into a slot, returning whatever was there before.
    pub fn insert(&mut self, slot: usize, fixture: Match) -> Option<Match> {
        self.slots.insert(slot, fixture)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(slot, fixture)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Match)> {
        self.slots.iter().map(|(slot, m)| (*slot, m))
    }

    /// Iterate over fixtures in slot order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.slots.values()
    }
}

impl FromIterator<Match> for PredictionSet {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self::from_matches(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_matches_numbers_slots_from_zero() {
        let set = PredictionSet::from_matches([Match::new("A", "B"), Match::new("C", "D")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().home_team, "A");
        assert_eq!(set.get(1).unwrap().home_team, "C");
        assert!(set.get(2).is_none());
    }

    #[test]
    fn iteration_is_slot_ordered() {
        let mut set = PredictionSet::new();
        set.insert(2, Match::new("E", "F"));
        set.insert(0, Match::new("A", "B"));
        set.insert(1, Match::new("C", "D"));
        let slots: Vec<usize> = set.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn insert_replaces() {
        let mut set = PredictionSet::new();
        assert!(set.insert(0, Match::new("A", "B")).is_none());
        let old = set.insert(0, Match::new("C", "D")).unwrap();
        assert_eq!(old.home_team, "A");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serde_roundtrip_keeps_slots() {
        let set: PredictionSet = [Match::new("A", "B"), Match::new("C", "D")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        let back: PredictionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
