//! Storage contract consumed by the tournament director

use async_trait::async_trait;
use std::collections::BTreeMap;
use swiss_core::{MatchHistory, PlayerId, Standing, Standings};

use crate::error::StoreError;

/// Standings and match history read together, so pairing sees one
/// consistent state of the tournament.
#[derive(Debug, Clone, Default)]
pub struct RoundSnapshot {
    pub standings: Standings,
    pub history: MatchHistory,
}

/// Persistent record of players, match results and byes.
///
/// Every write validates its invariants before touching storage and
/// reports a [`ConstraintViolation`](crate::ConstraintViolation) instead of
/// writing when they do not hold.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Register a player. Names need not be unique.
    async fn register_player(&self, name: &str) -> Result<PlayerId, StoreError>;

    /// Record the outcome of a single match.
    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<(), StoreError>;

    /// Record that a player sat out a round.
    async fn report_bye(&self, player: PlayerId) -> Result<(), StoreError>;

    /// Remove every match and bye, keeping the players.
    async fn delete_matches(&self) -> Result<(), StoreError>;

    /// Remove every player along with their matches and byes.
    async fn delete_players(&self) -> Result<(), StoreError>;

    /// Reset the tournament completely, including id assignment.
    async fn clear(&self) -> Result<(), StoreError>;

    async fn count_players(&self) -> Result<u64, StoreError>;

    /// Standings ordered by wins, highest first, ties in registration order.
    async fn player_standings(&self) -> Result<Vec<Standing>, StoreError>;

    /// Matches played per player.
    async fn match_counts(&self) -> Result<BTreeMap<PlayerId, u32>, StoreError>;

    async fn match_history(&self) -> Result<MatchHistory, StoreError>;

    /// Standings and history from a single read.
    async fn round_snapshot(&self) -> Result<RoundSnapshot, StoreError>;
}
