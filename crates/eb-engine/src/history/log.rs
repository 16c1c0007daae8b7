//! History storage and export.

use serde::{Deserialize, Serialize};

use eb_core::TournamentData;

use super::entry::HistoryEntry;
use crate::error::BracketResult;
use crate::format::{describe_match, describe_scorers};

/// A chronological log of a tournament run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rounds closed since the last restart.
    pub fn rounds_played(&self) -> usize {
        self.entries
            .iter()
            .rev()
            .take_while(|e| !matches!(e, HistoryEntry::Restarted { .. }))
            .filter(|e| matches!(e, HistoryEntry::RoundPlayed { .. }))
            .count()
    }

    /// Export the history as markdown, using localized team names.
    pub fn export_markdown(&self, data: &TournamentData) -> String {
        let mut out = format!("# {} Bracket\n\n", data.name);
        for entry in &self.entries {
            match entry {
                HistoryEntry::RoundPlayed { round, matches, .. } => {
                    out.push_str(&format!("## {} ({round})\n\n", round.localized_title()));
                    for m in matches {
                        out.push_str(&format!("- {}\n", describe_match(data, m)));
                        for scorers in [&m.home_scorers, &m.away_scorers] {
                            if !scorers.is_empty() {
                                out.push_str(&format!("  - {}\n", describe_scorers(scorers)));
                            }
                        }
                    }
                    out.push('\n');
                }
                HistoryEntry::RoundSimulated { round, .. } => {
                    out.push_str(&format!("*{round} simulated*\n\n"));
                }
                HistoryEntry::Champion { team, .. } => {
                    out.push_str(&format!("**Champion**: {}\n\n", data.display_name(team)));
                }
                HistoryEntry::Restarted { .. } => {
                    out.push_str("---\n\n*Restarted*\n\n");
                }
            }
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self, data: &TournamentData) -> String {
        let title = format!("{} Bracket", data.name);
        let mut out = format!("{title}\n{}\n\n", "=".repeat(title.chars().count()));
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            match entry {
                HistoryEntry::RoundPlayed {
                    round,
                    matches,
                    winners,
                    ..
                } => {
                    out.push_str(&format!("[{time}] {round}\n"));
                    for m in matches {
                        out.push_str(&format!("  {}\n", describe_match(data, m)));
                    }
                    let names: Vec<&str> =
                        winners.iter().map(|w| data.display_name(w)).collect();
                    out.push_str(&format!("  Through: {}\n\n", names.join(", ")));
                }
                HistoryEntry::RoundSimulated { round, .. } => {
                    out.push_str(&format!("[{time}] {round} simulated\n\n"));
                }
                HistoryEntry::Champion { team, .. } => {
                    out.push_str(&format!("[{time}] Champion: {}\n\n", data.display_name(team)));
                }
                HistoryEntry::Restarted { .. } => {
                    out.push_str(&format!("[{time}] Restarted\n\n"));
                }
            }
        }
        out
    }

    /// Export the history as pretty-printed JSON.
    pub fn export_json(&self) -> BracketResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
