//! Randomized match simulation.
//!
//! Scores are drawn in two steps: a total uniformly from
//! `0..=max_total_goals`, then the home share uniformly from `0..=total`.
//! Draws are rejected and the whole pair redrawn, so regulation results are
//! always decisive. A separate shootout roll then turns a fixed fraction of
//! matches into level scores settled on penalties.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use eb_core::{CoreResult, Match, PredictionSet, Round, Scorer, TournamentData};

use crate::config::BracketConfig;
use crate::error::{BracketError, BracketResult};

/// Minutes a simulated goal can be scored in.
const MINUTES: std::ops::RangeInclusive<u32> = 1..=90;

/// Possible shootout margins.
const PENALTY_MARGINS: std::ops::RangeInclusive<u32> = 1..=2;

/// Possible penalty counts for the losing side.
const LOSER_PENALTIES: std::ops::RangeInclusive<u32> = 3..=5;

/// Seeded generator of scores, shootouts, and goal scorers.
#[derive(Debug, Clone)]
pub struct MatchSimulator {
    rng: StdRng,
    shootout_chance: f64,
    max_total_goals: u32,
}

impl MatchSimulator {
    /// Create a simulator from a session configuration.
    pub fn new(config: &BracketConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            shootout_chance: if config.shootout_chance.is_nan() {
                0.0
            } else {
                config.shootout_chance.clamp(0.0, 1.0)
            },
            max_total_goals: config.max_total_goals.max(1),
        }
    }

    /// Draw a decisive regulation score `(home, away)`.
    ///
    /// Loops until the draw is not level. Only an even total split exactly
    /// in half is rejected, so the loop exits after a few attempts.
    pub fn regulation_score(&mut self) -> (u32, u32) {
        loop {
            let total = self.rng.random_range(0..=self.max_total_goals);
            let home = self.rng.random_range(0..=total);
            let away = total - home;
            if home != away {
                return (home, away);
            }
        }
    }

    /// Draw a shootout result `(home, away)`: the winner scores one or two
    /// more than a loser who scored three to five.
    pub fn shootout(&mut self) -> (u32, u32) {
        let home_wins = self.rng.random_bool(0.5);
        let margin = self.rng.random_range(PENALTY_MARGINS);
        let loser = self.rng.random_range(LOSER_PENALTIES);
        let winner = loser + margin;
        if home_wins {
            (winner, loser)
        } else {
            (loser, winner)
        }
    }

    /// Pick a scorer (with replacement) and minute for each goal.
    ///
    /// Fails for teams missing from the table rather than inventing players.
    pub fn generate_scorers(
        &mut self,
        data: &TournamentData,
        team: &str,
        goal_count: u32,
    ) -> CoreResult<Vec<Scorer>> {
        let roster = data.roster(team)?;
        Ok((0..goal_count)
            .map(|_| Scorer {
                player: roster[self.rng.random_range(0..roster.len())].clone(),
                minute: self.rng.random_range(MINUTES),
            })
            .collect())
    }

    /// Simulate one fixture, keeping its teams and replacing everything else.
    pub fn simulate_match(&mut self, data: &TournamentData, fixture: &Match) -> CoreResult<Match> {
        let (home_score, mut away_score) = self.regulation_score();
        let mut penalties = None;

        if self.rng.random_bool(self.shootout_chance) {
            away_score = home_score;
            penalties = Some(self.shootout());
        }

        let mut simulated = Match::new(fixture.home_team.clone(), fixture.away_team.clone());
        simulated.home_score = Some(home_score);
        simulated.away_score = Some(away_score);
        simulated.set_penalties(penalties);
        simulated.home_scorers = self.generate_scorers(data, &fixture.home_team, home_score)?;
        simulated.away_scorers = self.generate_scorers(data, &fixture.away_team, away_score)?;

        debug!(result = %simulated, "simulated match");
        Ok(simulated)
    }

    /// Simulate every match of a round, discarding any entered scores.
    ///
    /// Missing round-of-16 slots are filled from the seed pairings; later
    /// rounds must already have every slot.
    pub fn simulate_round(
        &mut self,
        data: &TournamentData,
        predictions: &PredictionSet,
        round: Round,
    ) -> BracketResult<PredictionSet> {
        let mut simulated = PredictionSet::new();
        for slot in 0..round.match_count() {
            let fixture = match (predictions.get(slot), round) {
                (Some(fixture), _) => fixture.clone(),
                (None, Round::RoundOf16) => data
                    .seeds
                    .get(slot)
                    .map(|s| Match::new(s.home.clone(), s.away.clone()))
                    .ok_or(BracketError::SlotNotFound { round, slot })?,
                (None, _) => return Err(BracketError::SlotNotFound { round, slot }),
            };
            simulated.insert(slot, self.simulate_match(data, &fixture)?);
        }
        Ok(simulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{is_round_complete, resolve_winner};
    use eb_core::CoreError;
    use proptest::prelude::*;

    fn seeded(seed: u64) -> MatchSimulator {
        MatchSimulator::new(&BracketConfig::default().with_seed(seed))
    }

    fn seed_round(data: &TournamentData) -> PredictionSet {
        data.seeds
            .iter()
            .map(|s| Match::new(s.home.clone(), s.away.clone()))
            .collect()
    }

    #[test]
    fn regulation_score_is_decisive_and_bounded() {
        let mut sim = seeded(1);
        for _ in 0..1000 {
            let (h, a) = sim.regulation_score();
            assert_ne!(h, a);
            assert!(h + a <= 5);
        }
    }

    #[test]
    fn regulation_score_reaches_every_total() {
        let mut sim = seeded(2);
        let mut totals = std::collections::HashSet::new();
        for _ in 0..2000 {
            let (h, a) = sim.regulation_score();
            totals.insert(h + a);
        }
        // A total of 0 is always 0-0 and never survives rejection.
        assert_eq!(totals.len(), 5, "totals seen: {totals:?}");
        assert!(!totals.contains(&0));
    }

    #[test]
    fn shootout_shape() {
        let mut sim = seeded(3);
        for _ in 0..500 {
            let (h, a) = sim.shootout();
            let (winner, loser) = (h.max(a), h.min(a));
            assert!((3..=5).contains(&loser));
            assert!((1..=2).contains(&(winner - loser)));
        }
    }

    #[test]
    fn scorers_match_goal_count_and_roster() {
        let data = TournamentData::euro_2024();
        let roster = data.roster("England").unwrap().to_vec();
        let mut sim = seeded(4);
        let scorers = sim.generate_scorers(&data, "England", 4).unwrap();
        assert_eq!(scorers.len(), 4);
        for s in &scorers {
            assert!(roster.contains(&s.player));
            assert!((1..=90).contains(&s.minute));
        }
        assert!(sim.generate_scorers(&data, "England", 0).unwrap().is_empty());
    }

    #[test]
    fn scorers_for_unknown_team_fail() {
        let data = TournamentData::euro_2024();
        let mut sim = seeded(5);
        assert!(matches!(
            sim.generate_scorers(&data, "Atlantis", 2),
            Err(CoreError::UnknownTeam(_))
        ));
    }

    #[test]
    fn default_shootout_rate_and_winners() {
        let data = TournamentData::euro_2024();
        let mut sim = MatchSimulator::new(&BracketConfig::default());
        let fixture = Match::new("Portugal", "Slovenia");

        let trials = 3000;
        let (mut shootouts, mut home_wins, mut away_wins) = (0, 0, 0);
        for _ in 0..trials {
            let m = sim.simulate_match(&data, &fixture).unwrap();
            let Some((h, a)) = m.penalties() else {
                assert!(!m.is_tied());
                continue;
            };
            assert!(m.is_tied());
            shootouts += 1;
            let (winner, loser) = (h.max(a), h.min(a));
            assert!((3..=5).contains(&loser));
            assert!((1..=2).contains(&(winner - loser)));
            if h > a {
                home_wins += 1;
            } else {
                away_wins += 1;
            }
        }

        let share = f64::from(shootouts) / f64::from(trials);
        assert!((0.07..=0.13).contains(&share), "shootout share {share}");
        assert!(home_wins > 0 && away_wins > 0);
    }

    #[test]
    fn always_shootout_when_chance_is_one() {
        let data = TournamentData::euro_2024();
        let config = BracketConfig::default().with_shootout_chance(1.0);
        let mut sim = MatchSimulator::new(&config);
        let m = sim.simulate_match(&data, &Match::new("Spain", "Georgia")).unwrap();
        assert!(m.is_tied());
        assert!(m.penalties().is_some());
        assert_eq!(m.home_scorers.len(), m.away_scorers.len());
    }

    #[test]
    fn never_shootout_when_chance_is_zero() {
        let data = TournamentData::euro_2024();
        let config = BracketConfig::default().with_shootout_chance(0.0);
        let mut sim = MatchSimulator::new(&config);
        let round = sim
            .simulate_round(&data, &seed_round(&data), Round::RoundOf16)
            .unwrap();
        assert!(round.matches().all(|m| !m.is_tied() && m.penalties().is_none()));
    }

    #[test]
    fn simulate_round_overwrites_entered_scores() {
        let data = TournamentData::euro_2024();
        let mut set = seed_round(&data);
        set.get_mut(0).unwrap().home_score = Some(9);
        set.get_mut(0).unwrap().away_score = Some(9);

        let mut sim = seeded(6);
        let round = sim.simulate_round(&data, &set, Round::RoundOf16).unwrap();
        assert!(is_round_complete(&round, Round::RoundOf16));
        let first = round.get(0).unwrap();
        assert_eq!(first.home_team, "Spain");
        assert!(first.home_score.unwrap() + first.away_score.unwrap() <= 5);
    }

    #[test]
    fn simulate_round_fills_missing_seed_slots() {
        let data = TournamentData::euro_2024();
        let mut sim = seeded(7);
        let round = sim
            .simulate_round(&data, &PredictionSet::new(), Round::RoundOf16)
            .unwrap();
        assert_eq!(round.len(), 8);
        assert_eq!(round.get(7).unwrap().away_team, "Italy");
    }

    #[test]
    fn simulate_round_requires_later_slots() {
        let data = TournamentData::euro_2024();
        let mut sim = seeded(8);
        assert!(matches!(
            sim.simulate_round(&data, &PredictionSet::new(), Round::Final),
            Err(BracketError::SlotNotFound { slot: 0, .. })
        ));
    }

    #[test]
    fn same_seed_same_results() {
        let data = TournamentData::euro_2024();
        let set = seed_round(&data);
        let a = seeded(99).simulate_round(&data, &set, Round::RoundOf16).unwrap();
        let b = seeded(99).simulate_round(&data, &set, Round::RoundOf16).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn simulated_ties_always_have_penalties(seed in any::<u64>()) {
            let data = TournamentData::euro_2024();
            let mut sim = seeded(seed);
            let round = sim
                .simulate_round(&data, &seed_round(&data), Round::RoundOf16)
                .unwrap();
            for m in round.matches() {
                if m.home_score == m.away_score {
                    prop_assert!(m.home_penalties.is_some() && m.away_penalties.is_some());
                }
                prop_assert!(resolve_winner(m).is_ok());
                prop_assert_eq!(m.home_scorers.len() as u32, m.home_score.unwrap());
                prop_assert_eq!(m.away_scorers.len() as u32, m.away_score.unwrap());
            }
        }

        #[test]
        fn regulation_never_level(seed in any::<u64>(), max in 1u32..12) {
            let config = BracketConfig::default().with_seed(seed).with_max_total_goals(max);
            let mut sim = MatchSimulator::new(&config);
            let (h, a) = sim.regulation_score();
            prop_assert_ne!(h, a);
            prop_assert!(h + a <= max);
        }
    }
}
