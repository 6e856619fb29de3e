//! Simulated tournaments with seeded random results

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tournament_store::TournamentStore;
use tracing::info;

use crate::director::{TournamentDirector, Winner};
use crate::error::TournamentError;
use crate::report::TournamentReport;

/// Configuration for a simulated tournament
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of players to register
    pub players: usize,
    /// Seed for match results; equal seeds replay the same tournament
    pub seed: u64,
    /// Probability that the lower-ranked player of a pair wins
    pub upset_chance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            players: 16,
            seed: 0,
            upset_chance: 0.35,
        }
    }
}

/// Rounds needed to separate a single leader: ⌈log₂ players⌉.
pub fn rounds_needed(players: usize) -> u32 {
    if players < 2 {
        0
    } else {
        usize::BITS - (players - 1).leading_zeros()
    }
}

/// Register `config.players` players and play a full Swiss tournament.
///
/// Players are added to whatever the store already holds, so callers
/// normally hand in an empty store.
pub async fn simulate<S: TournamentStore>(
    director: &TournamentDirector<S>,
    config: &SimulationConfig,
) -> Result<TournamentReport, TournamentError> {
    if !(0.0..=1.0).contains(&config.upset_chance) {
        return Err(TournamentError::Config(format!(
            "upset chance must be between 0 and 1, got {}",
            config.upset_chance
        )));
    }

    for n in 1..=config.players {
        director.register_player(&format!("Player {n}")).await?;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = TournamentReport::new(&format!(
        "Simulated Swiss tournament ({} players)",
        config.players
    ));

    let rounds = rounds_needed(config.players);
    for round in 1..=rounds {
        let pairing = director
            .play_round(|_| {
                if rng.gen_bool(config.upset_chance) {
                    Winner::Second
                } else {
                    Winner::First
                }
            })
            .await?;
        info!(round, of = rounds, "simulated round");
        report.add_round(pairing);
    }

    report.standings = director.player_standings().await?;
    Ok(report)
}
