//! Live prediction state for the current round.

use tracing::debug;

use eb_core::{Match, PredictionSet, Round, SeedPairing, Side, TournamentData};

use crate::error::{BracketError, BracketResult};
use crate::simulate::MatchSimulator;

/// Highest score a fixture accepts.
pub const MAX_SCORE: u32 = 99;

/// Holds the prediction set of the round being played.
#[derive(Debug, Clone)]
pub struct PredictionStore {
    predictions: PredictionSet,
    seeds: Vec<SeedPairing>,
}

impl PredictionStore {
    /// Create a store holding the round-of-16 seed pairings.
    pub fn new(data: &TournamentData) -> Self {
        Self {
            predictions: Self::initialize(&data.seeds),
            seeds: data.seeds.clone(),
        }
    }

    /// The unplayed round-of-16 fixtures built from seed pairings.
    pub fn initialize(seeds: &[SeedPairing]) -> PredictionSet {
        seeds
            .iter()
            .map(|s| Match::new(s.home.clone(), s.away.clone()))
            .collect()
    }

    /// Restore the seed pairings with all scores unset.
    pub fn reset(&mut self) {
        self.predictions = Self::initialize(&self.seeds);
    }

    /// The live prediction set.
    pub fn predictions(&self) -> &PredictionSet {
        &self.predictions
    }

    /// The fixture in a slot.
    pub fn get(&self, slot: usize) -> Option<&Match> {
        self.predictions.get(slot)
    }

    /// Swap the whole prediction set.
    pub fn replace(&mut self, predictions: PredictionSet) {
        self.predictions = predictions;
    }

    /// Set or clear one side's score.
    ///
    /// A defined score regenerates that side's scorers; clearing the score
    /// clears them. The other side is never touched. Any recorded shootout
    /// is dropped because it belonged to the previous scoreline. A missing
    /// round-of-16 slot is created from its seed pairing. The store is left
    /// unchanged on error.
    pub fn update_score(
        &mut self,
        round: Round,
        slot: usize,
        side: Side,
        value: Option<u32>,
        simulator: &mut MatchSimulator,
        data: &TournamentData,
    ) -> BracketResult<&Match> {
        if slot >= round.match_count() {
            return Err(BracketError::SlotNotFound { round, slot });
        }
        if value.is_some_and(|goals| goals > MAX_SCORE) {
            return Err(BracketError::InvalidScore(format!(
                "scores above {MAX_SCORE} are not accepted"
            )));
        }

        let mut fixture = match self.predictions.get(slot) {
            Some(fixture) => fixture.clone(),
            None => self
                .seeds
                .get(slot)
                .filter(|_| round == Round::RoundOf16)
                .map(|seed| Match::new(seed.home.clone(), seed.away.clone()))
                .ok_or(BracketError::SlotNotFound { round, slot })?,
        };

        let scorers = match value {
            Some(goals) => simulator.generate_scorers(data, fixture.team(side), goals)?,
            None => Vec::new(),
        };
        fixture.set_side(side, value, scorers);
        fixture.set_penalties(None);
        self.predictions.insert(slot, fixture);

        debug!(%round, slot, %side, ?value, "score updated");
        self.predictions
            .get(slot)
            .ok_or(BracketError::SlotNotFound { round, slot })
    }

    /// Record or clear the shootout of a level match.
    pub fn set_penalties(
        &mut self,
        round: Round,
        slot: usize,
        penalties: Option<(u32, u32)>,
    ) -> BracketResult<&Match> {
        let fixture = self
            .predictions
            .get_mut(slot)
            .ok_or(BracketError::SlotNotFound { round, slot })?;

        if let Some((home, away)) = penalties {
            if !fixture.is_tied() {
                return Err(BracketError::InvalidPenalties(
                    "penalties only decide a level match".to_string(),
                ));
            }
            if home == away {
                return Err(BracketError::InvalidPenalties(
                    "a shootout cannot end level".to_string(),
                ));
            }
        }

        fixture.set_penalties(penalties);
        debug!(%round, slot, ?penalties, "penalties updated");
        Ok(&*fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BracketConfig;

    fn setup() -> (PredictionStore, MatchSimulator, TournamentData) {
        let data = TournamentData::euro_2024();
        let store = PredictionStore::new(&data);
        let sim = MatchSimulator::new(&BracketConfig::default());
        (store, sim, data)
    }

    #[test]
    fn initialize_uses_seed_pairings() {
        let (store, _, data) = setup();
        assert_eq!(store.predictions().len(), 8);
        for (slot, m) in store.predictions().iter() {
            assert_eq!(m.home_team, data.seeds[slot].home);
            assert_eq!(m.away_team, data.seeds[slot].away);
            assert!(m.home_score.is_none() && m.away_score.is_none());
        }
    }

    #[test]
    fn update_generates_scorers() {
        let (mut store, mut sim, data) = setup();
        let m = store
            .update_score(Round::RoundOf16, 2, Side::Home, Some(3), &mut sim, &data)
            .unwrap();
        assert_eq!(m.home_score, Some(3));
        assert_eq!(m.home_scorers.len(), 3);
        assert!(m.home_scorers.iter().all(|s| (1..=90).contains(&s.minute)));
        assert!(m.away_scorers.is_empty());
    }

    #[test]
    fn clearing_score_clears_only_that_side() {
        let (mut store, mut sim, data) = setup();
        store
            .update_score(Round::RoundOf16, 0, Side::Home, Some(3), &mut sim, &data)
            .unwrap();
        store
            .update_score(Round::RoundOf16, 0, Side::Away, Some(2), &mut sim, &data)
            .unwrap();
        let m = store
            .update_score(Round::RoundOf16, 0, Side::Home, None, &mut sim, &data)
            .unwrap();
        assert!(m.home_score.is_none());
        assert!(m.home_scorers.is_empty());
        assert_eq!(m.away_score, Some(2));
        assert_eq!(m.away_scorers.len(), 2);
    }

    #[test]
    fn update_recreates_missing_round_of_16_slot() {
        let (mut store, mut sim, data) = setup();
        store.replace(PredictionSet::new());
        let m = store
            .update_score(Round::RoundOf16, 5, Side::Away, Some(1), &mut sim, &data)
            .unwrap();
        assert_eq!(m.home_team, "England");
        assert_eq!(m.away_team, "Slovakia");
        assert_eq!(m.away_scorers.len(), 1);
    }

    #[test]
    fn update_missing_slot_in_later_round_fails() {
        let (mut store, mut sim, data) = setup();
        store.replace(PredictionSet::new());
        let err = store
            .update_score(Round::Quarterfinals, 0, Side::Home, Some(1), &mut sim, &data)
            .unwrap_err();
        assert!(matches!(err, BracketError::SlotNotFound { slot: 0, .. }));
    }

    #[test]
    fn update_out_of_range_slot_fails() {
        let (mut store, mut sim, data) = setup();
        assert!(
            store
                .update_score(Round::RoundOf16, 8, Side::Home, Some(1), &mut sim, &data)
                .is_err()
        );
    }

    #[test]
    fn update_rejects_scores_above_limit() {
        let (mut store, mut sim, data) = setup();
        let err = store
            .update_score(
                Round::RoundOf16,
                0,
                Side::Home,
                Some(MAX_SCORE + 1),
                &mut sim,
                &data,
            )
            .unwrap_err();
        assert!(matches!(err, BracketError::InvalidScore(_)));
        assert!(
            store
                .update_score(Round::RoundOf16, 0, Side::Home, Some(u32::MAX), &mut sim, &data)
                .is_err()
        );
        assert!(store.get(0).unwrap().home_score.is_none());

        let m = store
            .update_score(Round::RoundOf16, 0, Side::Home, Some(MAX_SCORE), &mut sim, &data)
            .unwrap();
        assert_eq!(m.home_scorers.len(), MAX_SCORE as usize);
    }

    #[test]
    fn failed_update_leaves_store_unchanged() {
        let (mut store, mut sim, data) = setup();
        let mut rosterless = data.clone();
        rosterless.teams.retain(|t| t.id != "Spain");

        store.replace(PredictionSet::new());
        assert!(
            store
                .update_score(Round::RoundOf16, 0, Side::Home, Some(2), &mut sim, &rosterless)
                .is_err()
        );
        assert!(store.get(0).is_none());

        store.reset();
        store
            .update_score(Round::RoundOf16, 0, Side::Away, Some(1), &mut sim, &data)
            .unwrap();
        let before = store.get(0).unwrap().clone();
        assert!(
            store
                .update_score(Round::RoundOf16, 0, Side::Home, Some(2), &mut sim, &rosterless)
                .is_err()
        );
        assert_eq!(store.get(0).unwrap(), &before);
    }

    #[test]
    fn update_clears_penalties() {
        let (mut store, mut sim, data) = setup();
        store
            .update_score(Round::RoundOf16, 0, Side::Home, Some(1), &mut sim, &data)
            .unwrap();
        store
            .update_score(Round::RoundOf16, 0, Side::Away, Some(1), &mut sim, &data)
            .unwrap();
        store
            .set_penalties(Round::RoundOf16, 0, Some((4, 3)))
            .unwrap();
        let m = store
            .update_score(Round::RoundOf16, 0, Side::Away, Some(2), &mut sim, &data)
            .unwrap();
        assert!(m.penalties().is_none());
    }

    #[test]
    fn penalties_require_level_match() {
        let (mut store, mut sim, data) = setup();
        assert!(store.set_penalties(Round::RoundOf16, 0, Some((4, 3))).is_err());
        store
            .update_score(Round::RoundOf16, 0, Side::Home, Some(2), &mut sim, &data)
            .unwrap();
        store
            .update_score(Round::RoundOf16, 0, Side::Away, Some(2), &mut sim, &data)
            .unwrap();
        assert!(store.set_penalties(Round::RoundOf16, 0, Some((3, 3))).is_err());
        let m = store
            .set_penalties(Round::RoundOf16, 0, Some((3, 5)))
            .unwrap();
        assert_eq!(m.penalties(), Some((3, 5)));
        let m = store.set_penalties(Round::RoundOf16, 0, None).unwrap();
        assert!(m.penalties().is_none());
    }

    #[test]
    fn reset_restores_seeds() {
        let (mut store, mut sim, data) = setup();
        store
            .update_score(Round::RoundOf16, 0, Side::Home, Some(2), &mut sim, &data)
            .unwrap();
        store.reset();
        assert_eq!(store.predictions(), &PredictionStore::initialize(&data.seeds));
    }
}
