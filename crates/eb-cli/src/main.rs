//! CLI frontend for the Euro Bracket predictor.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eb",
    about = "Euro Bracket: predict and simulate the Euro 2024 knockout stage",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the bracket interactively
    Play {
        /// RNG seed for scorers and simulated rounds
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON file with seed pairings and team tables (default: Euro 2024)
        #[arg(short, long)]
        teams: Option<PathBuf>,
    },

    /// Simulate the whole knockout stage and print every round
    Simulate {
        /// RNG seed for deterministic results
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON file with seed pairings and team tables (default: Euro 2024)
        #[arg(short, long)]
        teams: Option<PathBuf>,

        /// Output format: table, json, markdown
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the teams, their seed pairings, and rosters
    Teams {
        /// JSON file with seed pairings and team tables (default: Euro 2024)
        #[arg(short, long)]
        teams: Option<PathBuf>,

        /// Print the tables as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, teams } => commands::play::run(teams.as_deref(), seed),
        Commands::Simulate {
            seed,
            teams,
            format,
        } => commands::simulate::run(teams.as_deref(), seed, &format),
        Commands::Teams { teams, json } => commands::teams::run(teams.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = if verbose {
        "eb_engine=debug,eb_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
