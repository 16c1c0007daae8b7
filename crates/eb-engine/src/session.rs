//! Tournament session management.
//!
//! `TournamentSession` is the single owner of the bracket state: the current
//! round, the live prediction store, the champion once decided, the seeded
//! simulator, and the history of the run. Every mutation goes through one of
//! its methods, and `process` exposes the same operations as a small
//! line-oriented command language for interactive front ends.

use chrono::Utc;
use tracing::{debug, info};

use eb_core::{Match, PredictionSet, Round, Side, TeamId, TournamentData};

use crate::bracket::{advance_round, is_round_complete, round_winners, winning_side};
use crate::config::BracketConfig;
use crate::error::{BracketError, BracketResult};
use crate::format::{describe_match, describe_scorers};
use crate::history::{History, HistoryEntry};
use crate::simulate::MatchSimulator;
use crate::store::{MAX_SCORE, PredictionStore};

/// Outcome of a successful round advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Winners were paired into the next round.
    Advanced {
        /// The round that was closed.
        from: Round,
        /// The round now being played.
        to: Round,
        /// Winners of the closed round, in slot order.
        winners: Vec<TeamId>,
    },
    /// The final was resolved.
    Champion(TeamId),
}

/// An interactive bracket prediction session.
#[derive(Debug, Clone)]
pub struct TournamentSession {
    data: TournamentData,
    round: Round,
    store: PredictionStore,
    champion: Option<TeamId>,
    simulator: MatchSimulator,
    history: History,
}

impl TournamentSession {
    /// Create a session on the round of 16 from validated tournament data.
    pub fn new(data: TournamentData, config: BracketConfig) -> BracketResult<Self> {
        data.validate()?;
        let store = PredictionStore::new(&data);
        let simulator = MatchSimulator::new(&config);

        info!(
            tournament = %data.name,
            version = %data.version,
            seed = config.seed,
            "session started"
        );

        Ok(Self {
            data,
            round: Round::RoundOf16,
            store,
            champion: None,
            simulator,
            history: History::new(),
        })
    }

    /// The tournament tables.
    pub fn data(&self) -> &TournamentData {
        &self.data
    }

    /// The round being played (the final once the champion is decided).
    pub fn round(&self) -> Round {
        self.round
    }

    /// The live prediction set.
    pub fn predictions(&self) -> &PredictionSet {
        self.store.predictions()
    }

    /// Whether every match of the current round has both scores.
    pub fn all_scores_set(&self) -> bool {
        is_round_complete(self.store.predictions(), self.round)
    }

    /// Whether every match of the current round has a winner.
    pub fn is_decided(&self) -> bool {
        self.all_scores_set()
            && (0..self.round.match_count()).all(|slot| {
                self.store
                    .get(slot)
                    .and_then(winning_side)
                    .is_some()
            })
    }

    /// The champion, once the final has been resolved.
    pub fn champion(&self) -> Option<&str> {
        self.champion.as_deref()
    }

    /// Whether the tournament reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.champion.is_some()
    }

    /// The history of this run.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Set or clear one side's score of a match in the current round.
    pub fn update_score(
        &mut self,
        slot: usize,
        side: Side,
        value: Option<u32>,
    ) -> BracketResult<&Match> {
        self.ensure_playing()?;
        self.store.update_score(
            self.round,
            slot,
            side,
            value,
            &mut self.simulator,
            &self.data,
        )
    }

    /// Record or clear the shootout deciding a level match.
    pub fn set_penalties(
        &mut self,
        slot: usize,
        penalties: Option<(u32, u32)>,
    ) -> BracketResult<&Match> {
        self.ensure_playing()?;
        self.store.set_penalties(self.round, slot, penalties)
    }

    /// Replace every match of the current round with a simulated result.
    pub fn simulate(&mut self) -> BracketResult<&PredictionSet> {
        self.ensure_playing()?;
        let simulated =
            self.simulator
                .simulate_round(&self.data, self.store.predictions(), self.round)?;
        self.store.replace(simulated);
        self.history.append(HistoryEntry::RoundSimulated {
            round: self.round,
            timestamp: Utc::now(),
        });
        info!(round = %self.round, "round simulated");
        Ok(self.store.predictions())
    }

    /// Close the current round.
    ///
    /// Requires every score to be set. Either pairs the winners into the
    /// next round or, from the final, crowns the champion. Nothing changes
    /// if any winner cannot be determined.
    pub fn advance(&mut self) -> BracketResult<Progress> {
        self.ensure_playing()?;
        if !self.all_scores_set() {
            return Err(BracketError::RoundIncomplete(self.round));
        }

        let from = self.round;
        let played: Vec<Match> = self.store.predictions().matches().cloned().collect();

        let progress = if from.is_final() {
            let champion = round_winners(self.store.predictions(), from)?
                .into_iter()
                .next()
                .ok_or(BracketError::SlotNotFound {
                    round: from,
                    slot: 0,
                })?;
            self.champion = Some(champion.clone());
            info!(champion = %champion, "champion decided");
            Progress::Champion(champion)
        } else {
            let to = from.next().ok_or(BracketError::NoNextRound)?;
            let (winners, next) = advance_round(self.store.predictions(), from)?;
            self.store.replace(next);
            self.round = to;
            info!(%from, %to, winners = ?winners, "round advanced");
            Progress::Advanced { from, to, winners }
        };

        let winners = match &progress {
            Progress::Advanced { winners, .. } => winners.clone(),
            Progress::Champion(team) => vec![team.clone()],
        };
        self.history.append(HistoryEntry::RoundPlayed {
            round: from,
            matches: played,
            winners,
            timestamp: Utc::now(),
        });
        if let Progress::Champion(team) = &progress {
            self.history.append(HistoryEntry::Champion {
                team: team.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(progress)
    }

    /// Reset to the round of 16 with the seed pairings, clearing the champion.
    pub fn restart(&mut self) {
        self.store.reset();
        self.round = Round::RoundOf16;
        self.champion = None;
        self.history.append(HistoryEntry::Restarted {
            timestamp: Utc::now(),
        });
        info!("bracket restarted");
    }

    fn ensure_playing(&self) -> BracketResult<()> {
        if self.is_finished() {
            Err(BracketError::TournamentFinished)
        } else {
            Ok(())
        }
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> BracketResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");
        debug!(command = %cmd, "processing command");

        match cmd.as_str() {
            "show" | "bracket" => Ok(self.render_round()),
            "score" => self.do_score(rest),
            "set" => self.do_set(rest),
            "pens" | "penalties" => self.do_penalties(rest),
            "simulate" | "sim" => {
                self.simulate()?;
                Ok(format!("Simulated.\n\n{}", self.render_round()))
            }
            "advance" | "next" => self.do_advance(),
            "restart" => {
                self.restart();
                Ok(format!("Bracket restarted.\n\n{}", self.render_round()))
            }
            "status" => Ok(self.render_status()),
            "history" => Ok(self.do_history()),
            "export" => self.do_export(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(BracketError::UnknownCommand(other.to_string())),
        }
    }

    fn do_score(&mut self, rest: &str) -> BracketResult<String> {
        let args: Vec<&str> = rest.split_whitespace().collect();
        let [slot, side, value] = args.as_slice() else {
            return Err(BracketError::InvalidCommand(
                "usage: score <match> <home|away> <goals|->".to_string(),
            ));
        };
        let slot = self.parse_slot(slot)?;
        let side = Side::parse(side).ok_or_else(|| {
            BracketError::InvalidCommand(format!("'{side}' is not a side, use home or away"))
        })?;
        let value = parse_score(value)?;

        self.update_score(slot, side, value)?;
        Ok(self.render_fixture(slot))
    }

    fn do_set(&mut self, rest: &str) -> BracketResult<String> {
        let (slot, score) = rest.split_once(' ').ok_or_else(|| {
            BracketError::InvalidCommand("usage: set <match> <home>-<away>".to_string())
        })?;
        let slot = self.parse_slot(slot)?;
        let (home, away) = parse_pair(score)?;

        self.update_score(slot, Side::Home, Some(home))?;
        self.update_score(slot, Side::Away, Some(away))?;

        let mut out = self.render_fixture(slot);
        if home == away {
            out.push_str(&format!(
                "\nLevel score: decide it with 'pens {} <home>-<away>'.",
                slot + 1
            ));
        }
        Ok(out)
    }

    fn do_penalties(&mut self, rest: &str) -> BracketResult<String> {
        let (slot, score) = rest.split_once(' ').ok_or_else(|| {
            BracketError::InvalidCommand("usage: pens <match> <home>-<away>|clear".to_string())
        })?;
        let slot = self.parse_slot(slot)?;
        let penalties = match score.trim().to_lowercase().as_str() {
            "clear" | "-" => None,
            other => Some(parse_pair(other)?),
        };

        self.set_penalties(slot, penalties)?;
        Ok(self.render_fixture(slot))
    }

    fn do_advance(&mut self) -> BracketResult<String> {
        match self.advance()? {
            Progress::Advanced { to, .. } => Ok(format!(
                "Advanced to the {to}.\n\n{}",
                self.render_round()
            )),
            Progress::Champion(team) => Ok(format!(
                "¡Campeón de la {}! {}",
                self.data.name,
                self.data.display_name(&team)
            )),
        }
    }

    fn do_history(&self) -> String {
        if self.history.is_empty() {
            return "No rounds played yet.".to_string();
        }
        self.history.export_text(&self.data).trim_end().to_string()
    }

    fn do_export(&self, format: &str) -> BracketResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.history.export_markdown(&self.data)),
            "text" | "txt" => Ok(self.history.export_text(&self.data)),
            "json" => self.history.export_json(),
            other => Err(BracketError::InvalidCommand(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }

    /// Parse a 1-based match number of the current round.
    fn parse_slot(&self, s: &str) -> BracketResult<usize> {
        let count = self.round.match_count();
        match s.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
            _ => Err(BracketError::InvalidCommand(format!(
                "match number must be between 1 and {count}"
            ))),
        }
    }

    /// Render the current round with every fixture and its scorers.
    pub fn render_round(&self) -> String {
        let mut out = format!("{} ({})\n", self.round.localized_title(), self.round);
        for slot in 0..self.round.match_count() {
            out.push_str(&self.render_fixture(slot));
            out.push('\n');
        }
        match self.champion() {
            Some(team) => out.push_str(&format!("\nChampion: {}", self.data.display_name(team))),
            None if self.all_scores_set() => out.push_str(&format!(
                "\nAll scores set. Type 'advance' to {}.",
                self.round.advance_label().to_lowercase()
            )),
            None => {}
        }
        out.trim_end().to_string()
    }

    fn render_fixture(&self, slot: usize) -> String {
        let Some(fixture) = self.store.get(slot) else {
            return format!("  {}. (empty)", slot + 1);
        };
        let mut out = format!("  {}. {}", slot + 1, describe_match(&self.data, fixture));
        for side in [Side::Home, Side::Away] {
            let scorers = fixture.scorers(side);
            if !scorers.is_empty() {
                out.push_str(&format!(
                    "\n       {}: {}",
                    self.data.display_name(fixture.team(side)),
                    describe_scorers(scorers)
                ));
            }
        }
        out
    }

    fn render_status(&self) -> String {
        let set = (0..self.round.match_count())
            .filter(|&slot| self.store.get(slot).is_some_and(Match::is_complete))
            .count();
        let mut out = format!(
            "Tournament: {} ({})\n",
            self.data.name, self.data.version
        );
        out.push_str(&format!(
            "Round: {} ({})\n",
            self.round.localized_title(),
            self.round
        ));
        out.push_str(&format!(
            "Scores set: {set}/{}\n",
            self.round.match_count()
        ));
        match self.champion() {
            Some(team) => out.push_str(&format!("Champion: {}\n", self.data.display_name(team))),
            None => out.push_str("Champion: undecided\n"),
        }
        out.push_str(&format!("History: {} entries", self.history.len()));
        out
    }
}

const HELP: &str = "\
Bracket Commands:
  show                          Show the current round
  score <n> <home|away> <g|->   Set or clear one side's score of match n
  set <n> <h>-<a>               Set both scores of match n
  pens <n> <h>-<a>|clear        Decide a level match on penalties
  simulate                      Simulate every match of the round
  advance                       Close the round once all scores are set
  restart                       Start over from the round of 16
  status                        Show session status
  history                       Show the rounds played so far
  export [markdown|text|json]   Export the history
  help                          Show this help
  quit                          Exit";

/// Parse a score entered by the user; `-` or `clear` unsets it.
fn parse_score(s: &str) -> BracketResult<Option<u32>> {
    let s = s.trim();
    if s == "-" || s.eq_ignore_ascii_case("clear") {
        return Ok(None);
    }
    let value: i64 = s
        .parse()
        .map_err(|_| BracketError::InvalidScore(format!("'{s}' is not a number")))?;
    if value < 0 {
        return Err(BracketError::InvalidScore(
            "scores cannot be negative".to_string(),
        ));
    }
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_SCORE)
        .map(Some)
        .ok_or_else(|| BracketError::InvalidScore(format!("scores above {MAX_SCORE} are not accepted")))
}

/// Parse `h-a`, `h:a`, or `h a` into two scores.
fn parse_pair(s: &str) -> BracketResult<(u32, u32)> {
    let s = s.trim();
    let (home, away) = s
        .split_once(['-', ':', ' '])
        .ok_or_else(|| BracketError::InvalidScore(format!("'{s}' is not a score like 2-1")))?;
    let home = parse_score(home)?
        .ok_or_else(|| BracketError::InvalidScore("home score is missing".to_string()))?;
    let away = parse_score(away)?
        .ok_or_else(|| BracketError::InvalidScore("away score is missing".to_string()))?;
    Ok((home, away))
}
