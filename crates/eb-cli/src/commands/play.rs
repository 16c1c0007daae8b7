use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use eb_engine::{BracketConfig, TournamentSession};

pub fn run(teams: Option<&Path>, seed: u64) -> Result<(), String> {
    let data = super::load_data(teams)?;
    let config = BracketConfig::default().with_seed(seed);

    let mut session =
        TournamentSession::new(data, config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} {}", session.data().name.bold(), "Bracket".bold());
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", session.render_round());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let was_finished = session.is_finished();
        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    if session.is_finished() && !was_finished {
                        println!("{}\n", output.green().bold());
                    } else {
                        println!("{output}\n");
                    }
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

/// Whether the line's command word ends the session.
fn is_quit(input: &str) -> bool {
    input
        .split_whitespace()
        .next()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q"))
}
