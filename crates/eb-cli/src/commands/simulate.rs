use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use eb_core::{Match, TournamentData};
use eb_engine::format::{PENALTIES, describe_scorers};
use eb_engine::{BracketConfig, HistoryEntry, TournamentSession};

pub fn run(teams: Option<&Path>, seed: u64, format: &str) -> Result<(), String> {
    let format = format.to_lowercase();
    if !matches!(format.as_str(), "table" | "json" | "markdown" | "md") {
        return Err(format!(
            "unknown format '{format}'. Supported: table, json, markdown"
        ));
    }

    let data = super::load_data(teams)?;
    let config = BracketConfig::default().with_seed(seed);
    let mut session =
        TournamentSession::new(data, config).map_err(|e| format!("failed to start session: {e}"))?;

    while !session.is_finished() {
        session
            .simulate()
            .map_err(|e| format!("simulation error: {e}"))?;
        session
            .advance()
            .map_err(|e| format!("simulation error: {e}"))?;
    }

    match format.as_str() {
        "json" => {
            let json = session
                .history()
                .export_json()
                .map_err(|e| format!("export failed: {e}"))?;
            println!("{json}");
        }
        "markdown" | "md" => print!("{}", session.history().export_markdown(session.data())),
        _ => print_tables(&session, seed),
    }

    Ok(())
}

fn print_tables(session: &TournamentSession, seed: u64) {
    let data = session.data();
    println!(
        "  {} {}",
        format!("{} Bracket", data.name).bold(),
        format!("(seed={seed})").dimmed()
    );
    println!();

    for entry in session.history().entries() {
        let HistoryEntry::RoundPlayed { round, matches, .. } = entry else {
            continue;
        };

        println!(
            "  {}",
            format!("{} ({round})", round.localized_title())
                .bold()
                .underline()
        );
        println!();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Home", "Score", "Away", "Scorers"]);

        for (slot, fixture) in matches.iter().enumerate() {
            table.add_row(vec![
                (slot + 1).to_string(),
                data.display_name(&fixture.home_team).to_string(),
                score_cell(fixture),
                data.display_name(&fixture.away_team).to_string(),
                scorers_cell(data, fixture),
            ]);
        }

        println!("{table}");
        println!();
    }

    if let Some(team) = session.champion() {
        println!(
            "  {} {}",
            "Champion:".green().bold(),
            data.display_name(team).bold()
        );
    }
}

fn score_cell(fixture: &Match) -> String {
    let score = format!(
        "{} - {}",
        fixture.home_score.unwrap_or_default(),
        fixture.away_score.unwrap_or_default()
    );
    match fixture.penalties() {
        Some((h, a)) => format!("{score} ({PENALTIES}: {h} - {a})"),
        None => score,
    }
}

fn scorers_cell(data: &TournamentData, fixture: &Match) -> String {
    [
        (&fixture.home_team, &fixture.home_scorers),
        (&fixture.away_team, &fixture.away_scorers),
    ]
    .into_iter()
    .filter(|(_, scorers)| !scorers.is_empty())
    .map(|(team, scorers)| format!("{}: {}", data.display_name(team), describe_scorers(scorers)))
    .collect::<Vec<_>>()
    .join("\n")
}
