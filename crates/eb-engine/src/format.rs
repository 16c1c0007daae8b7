//! Text rendering of fixtures with localized team names.

use eb_core::{Match, Scorer, TournamentData};

/// Label shown for a fixture that has not been played yet.
pub const NOT_PLAYED: &str = "Por jugar";

/// Label introducing a shootout result.
pub const PENALTIES: &str = "Penaltis";

/// Render a fixture as `Home h - a Away`, with the shootout if any.
pub fn describe_match(data: &TournamentData, fixture: &Match) -> String {
    let home = data.display_name(&fixture.home_team);
    let away = data.display_name(&fixture.away_team);
    match (fixture.home_score, fixture.away_score) {
        (Some(h), Some(a)) => match fixture.penalties() {
            Some((hp, ap)) => format!("{home} {h} - {a} {away} ({PENALTIES}: {hp} - {ap})"),
            None => format!("{home} {h} - {a} {away}"),
        },
        (h, a) => {
            let side = |s: Option<u32>| s.map_or_else(|| "_".to_string(), |v| v.to_string());
            if h.is_none() && a.is_none() {
                format!("{home} vs {away} ({NOT_PLAYED})")
            } else {
                format!("{home} {} - {} {away}", side(h), side(a))
            }
        }
    }
}

/// Render a scorer list as `Player (12'), Player (80')`.
pub fn describe_scorers(scorers: &[Scorer]) -> String {
    scorers
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
