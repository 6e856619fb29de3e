//! Tournament report storage and rendering

use serde::{Deserialize, Serialize};
use std::path::Path;
use swiss_core::{RoundPairing, Standing};

use crate::error::TournamentError;

/// Complete tournament record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Name/description of the tournament
    pub name: String,
    /// Rounds in the order they were played
    pub rounds: Vec<RoundRecord>,
    /// Final standings
    pub standings: Vec<Standing>,
}

/// A single round of the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub number: u32,
    pub pairing: RoundPairing,
}

impl TournamentReport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rounds: Vec::new(),
            standings: Vec::new(),
        }
    }

    /// Add a played round
    pub fn add_round(&mut self, pairing: RoundPairing) {
        let number = self.rounds.len() as u32 + 1;
        self.rounds.push(RoundRecord { number, pairing });
    }

    /// The player in first place, if anyone played
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TournamentError::Report(format!("Failed to serialize: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| TournamentError::Report(format!("Failed to write: {}", e)))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TournamentError::Report(format!("Failed to read: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| TournamentError::Report(format!("Failed to parse: {}", e)))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));

        for round in &self.rounds {
            report.push_str(&format!("Round {}:\n", round.number));
            report.push_str(&pairings_table(&round.pairing));
            report.push('\n');
        }

        report.push_str("Final standings:\n");
        report.push_str(&standings_table(&self.standings));

        if let Some(winner) = self.winner() {
            report.push_str(&format!("\nWinner: {}\n", winner.name));
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// `Id | Name | Wins | Matches` table, one row per player
pub fn standings_table(standings: &[Standing]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:>4} | {:<24} | {:>4} | {:>7}\n",
        "Id", "Name", "Wins", "Matches"
    ));
    table.push_str(&"-".repeat(48));
    table.push('\n');

    for s in standings {
        table.push_str(&format!(
            "{:>4} | {:<24} | {:>4} | {:>7}\n",
            s.id, s.name, s.wins, s.matches
        ));
    }
    table
}

/// One line per pair, then the bye if there is one
pub fn pairings_table(pairing: &RoundPairing) -> String {
    let mut table = String::new();
    for pair in &pairing.pairs {
        table.push_str(&format!(
            "  {:>4} {:<24} vs {:>4} {}\n",
            pair.first.id, pair.first.name, pair.second.id, pair.second.name
        ));
    }
    if let Some(bye) = &pairing.bye {
        table.push_str(&format!("  {:>4} {:<24} (bye)\n", bye.id, bye.name));
    }
    table
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
