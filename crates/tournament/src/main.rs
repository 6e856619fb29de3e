//! Tournament CLI
//!
//! Register players, report results and pair the next Swiss round.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swiss_core::PlayerId;
use tournament::{
    pairings_table, simulate, standings_table, SimulationConfig, TournamentDirector,
    TournamentSettings,
};
use tournament_store::SqliteStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", version, about = "Swiss-system tournament tracker")]
struct Cli {
    /// Settings file (default: ./tournament.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database URL, e.g. sqlite://club.db (overrides the settings file)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register one or more players
    Register {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Record the result of a match
    Report { winner: i64, loser: i64 },
    /// Record that a player sat out a round
    Bye { player: i64 },
    /// Print the number of registered players
    Count,
    /// Print the current standings
    Standings {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the pairings for the next round
    Pairings {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete all results, and all players unless --matches-only is given
    Reset {
        #[arg(long)]
        matches_only: bool,
    },
    /// Play out a whole tournament with random results
    Simulate {
        #[arg(long, default_value_t = 16)]
        players: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Probability that the lower-ranked player wins a match
        #[arg(long, default_value_t = 0.35)]
        upset_chance: f64,

        /// Write the report as JSON to this path
        #[arg(long)]
        save: Option<PathBuf>,

        /// Play into the configured database instead of a scratch one
        #[arg(long)]
        persist: bool,
    },
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Simulations play into a throwaway in-memory database unless `--persist`.
fn uses_scratch_store(command: &Command) -> bool {
    matches!(command, Command::Simulate { persist: false, .. })
}

async fn open_store(url: &str) -> Result<SqliteStore> {
    SqliteStore::connect(url)
        .await
        .with_context(|| format!("Failed to open tournament database {url}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = TournamentSettings::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.database {
        settings.database_url = url;
    }
    init_logging(&settings.log_filter);

    let store = if uses_scratch_store(&cli.command) {
        SqliteStore::in_memory().await?
    } else {
        open_store(&settings.database_url).await?
    };
    let director = TournamentDirector::new(store, settings.pairing);

    match cli.command {
        Command::Register { names } => {
            for name in &names {
                let id = director.register_player(name).await?;
                println!("{id}\t{}", name.trim());
            }
        }
        Command::Report { winner, loser } => {
            director
                .report_match(PlayerId::new(winner), PlayerId::new(loser))
                .await?;
            println!("Recorded: {winner} beat {loser}");
        }
        Command::Bye { player } => {
            director.report_bye(PlayerId::new(player)).await?;
            println!("Recorded bye for {player}");
        }
        Command::Count => {
            println!("{}", director.count_players().await?);
        }
        Command::Standings { json } => {
            let standings = director.player_standings().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", standings_table(&standings));
            }
        }
        Command::Pairings { json } => {
            let pairing = director.next_round_pairs().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pairing)?);
            } else {
                print!("{}", pairings_table(&pairing));
            }
        }
        Command::Reset { matches_only } => {
            if matches_only {
                director.delete_matches().await?;
                println!("Deleted all matches");
            } else {
                director.clear().await?;
                println!("Deleted all players and matches");
            }
        }
        Command::Simulate {
            players,
            seed,
            upset_chance,
            save,
            persist: _,
        } => {
            let config = SimulationConfig {
                players,
                seed,
                upset_chance,
            };
            let report = simulate(&director, &config).await?;
            report.print_report();
            if let Some(path) = save {
                report
                    .save(&path)
                    .with_context(|| format!("Failed to save report to {}", path.display()))?;
                println!("Report saved to {}", path.display());
            }
        }
    }

    director.store().close().await;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
