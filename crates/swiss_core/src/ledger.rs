//! Record of who has already met whom

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::types::PlayerId;

/// Answers whether two players have already played each other.
pub trait RematchLedger {
    /// Symmetric: `has_played(a, b) == has_played(b, a)`.
    fn has_played(&self, a: PlayerId, b: PlayerId) -> bool;

    /// Every player the ledger tracks, in ascending id order.
    fn participants(&self) -> Vec<PlayerId>;
}

/// Snapshot of registered players and the pairs that have met.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    players: BTreeSet<PlayerId>,
    played: HashSet<(PlayerId, PlayerId)>,
}

impl MatchHistory {
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            players: players.into_iter().collect(),
            played: HashSet::new(),
        }
    }

    /// Record a finished match. Unknown players are added to the roster.
    pub fn record(&mut self, winner: PlayerId, loser: PlayerId) {
        self.players.insert(winner);
        self.players.insert(loser);
        self.played.insert(unordered(winner, loser));
    }

    pub fn with_match(mut self, winner: PlayerId, loser: PlayerId) -> Self {
        self.record(winner, loser);
        self
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// Number of distinct pairs that have met.
    pub fn match_count(&self) -> usize {
        self.played.len()
    }
}

impl RematchLedger for MatchHistory {
    fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&unordered(a, b))
    }

    fn participants(&self) -> Vec<PlayerId> {
        self.players.iter().copied().collect()
    }
}

fn unordered(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}
