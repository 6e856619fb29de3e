//! Tournament settings loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;
use swiss_core::PairingConfig;

use crate::error::TournamentError;

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "tournament.toml";

/// Database used when neither the settings nor the command line name one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tournament.db";

/// Tournament settings
///
/// ```toml
/// database_url = "sqlite://club-night.db"
/// log_filter = "info,swiss_core=debug"
///
/// [pairing]
/// tie_break = "fewer-matches"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    /// sqlx connection URL of the tournament database
    pub database_url: String,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub pairing: PairingConfig,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter: "info".to_string(),
            pairing: PairingConfig::default(),
        }
    }
}

impl TournamentSettings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, TournamentError> {
        toml::from_str(contents).map_err(|e| TournamentError::Config(format!("Failed to parse: {}", e)))
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TournamentError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Load `path` if given, else `tournament.toml` when it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, TournamentError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_SETTINGS_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
