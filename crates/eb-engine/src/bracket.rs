//! Bracket rules: completeness, winner resolution, and round-to-round pairing.
//!
//! Pairing follows the fixed bracket topology rather than a sequential
//! re-draw: winners from opposite halves of the original draw can only meet
//! in the final.

use eb_core::{Match, PredictionSet, Round, Side, TeamId};

use crate::error::{BracketError, BracketResult};

/// Winner indices paired into the quarterfinals, in slot order.
const QUARTERFINAL_PAIRINGS: &[(usize, usize)] = &[(0, 2), (1, 3), (4, 6), (5, 7)];

/// Winner indices paired into the semifinals, in slot order.
const SEMIFINAL_PAIRINGS: &[(usize, usize)] = &[(0, 2), (1, 3)];

/// Winner indices paired into the final.
const FINAL_PAIRINGS: &[(usize, usize)] = &[(0, 1)];

/// Number of matches in a round.
pub fn match_count(round: Round) -> usize {
    round.match_count()
}

/// How the winners of `from` are paired into the next round.
///
/// Each entry is `(home winner index, away winner index)`. The final has no
/// successor.
pub fn pairings(from: Round) -> Option<&'static [(usize, usize)]> {
    match from {
        Round::RoundOf16 => Some(QUARTERFINAL_PAIRINGS),
        Round::Quarterfinals => Some(SEMIFINAL_PAIRINGS),
        Round::Semifinals => Some(FINAL_PAIRINGS),
        Round::Final => None,
    }
}

/// True iff every slot of the round exists and has both scores set.
pub fn is_round_complete(predictions: &PredictionSet, round: Round) -> bool {
    (0..round.match_count()).all(|slot| predictions.get(slot).is_some_and(Match::is_complete))
}

/// The side that won, or `None` if the match cannot be decided.
///
/// Higher regulation score wins. On a level score the side with strictly
/// more penalties wins; missing or equal penalties leave the match open.
pub fn winning_side(fixture: &Match) -> Option<Side> {
    let (home, away) = fixture.home_score.zip(fixture.away_score)?;
    if home > away {
        return Some(Side::Home);
    }
    if away > home {
        return Some(Side::Away);
    }
    let (home_pens, away_pens) = fixture.penalties()?;
    match home_pens.cmp(&away_pens) {
        std::cmp::Ordering::Greater => Some(Side::Home),
        std::cmp::Ordering::Less => Some(Side::Away),
        std::cmp::Ordering::Equal => None,
    }
}

/// The winning team of a match.
pub fn resolve_winner(fixture: &Match) -> BracketResult<TeamId> {
    winning_side(fixture)
        .map(|side| fixture.team(side).to_string())
        .ok_or_else(|| BracketError::Indeterminate(fixture.to_string()))
}

/// Winners of every match in the round, in slot order.
pub fn round_winners(predictions: &PredictionSet, round: Round) -> BracketResult<Vec<TeamId>> {
    (0..round.match_count())
        .map(|slot| {
            let fixture = predictions
                .get(slot)
                .ok_or(BracketError::SlotNotFound { round, slot })?;
            resolve_winner(fixture)
        })
        .collect()
}

/// Resolve the round and build the next round's fixtures.
///
/// Returns the winners in slot order together with the new, unplayed
/// prediction set. Fails with [`BracketError::NoNextRound`] for the final;
/// callers detect the terminal state by round identity.
pub fn advance_round(
    predictions: &PredictionSet,
    current_round: Round,
) -> BracketResult<(Vec<TeamId>, PredictionSet)> {
    let pairs = pairings(current_round).ok_or(BracketError::NoNextRound)?;
    let winners = round_winners(predictions, current_round)?;
    let next = pairs
        .iter()
        .map(|&(home, away)| Match::new(winners[home].clone(), winners[away].clone()))
        .collect();
    Ok((winners, next))
}
