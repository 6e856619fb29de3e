//! Standings snapshot and the ordering used to seed a round

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{PlayerId, Standing};

/// Source of the current standings.
///
/// Implementations must return players ordered by wins (highest first) with
/// ties kept in registration order, and must not change between calls made
/// during a single pairing.
pub trait StandingsProvider {
    fn standings(&self) -> Vec<Standing>;

    /// Total matches played by `player`, or `None` if the player is unknown.
    fn opponent_count(&self, player: PlayerId) -> Option<u32>;
}

/// How players with the same number of wins are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the provider's order (registration order)
    #[default]
    Registration,
    /// Fewer matches played ranks first, then registration order
    FewerMatches,
}

/// Owned standings snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    /// Build a snapshot, sorting by wins descending.
    ///
    /// The sort is stable, so input order breaks ties.
    pub fn new(mut entries: Vec<Standing>) -> Self {
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        Self { entries }
    }

    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, player: PlayerId) -> Option<&Standing> {
        self.entries.iter().find(|s| s.id == player)
    }

    pub fn leader(&self) -> Option<&Standing> {
        self.entries.first()
    }
}

impl StandingsProvider for Standings {
    fn standings(&self) -> Vec<Standing> {
        self.entries.clone()
    }

    fn opponent_count(&self, player: PlayerId) -> Option<u32> {
        self.get(player).map(|s| s.matches)
    }
}

impl FromIterator<Standing> for Standings {
    fn from_iter<I: IntoIterator<Item = Standing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Order standings for pairing. Highest rank first.
pub fn rank<P: StandingsProvider + ?Sized>(provider: &P, tie_break: TieBreak) -> Vec<Standing> {
    let mut ranked = provider.standings();
    ranked.sort_by(|a, b| {
        let by_wins = b.wins.cmp(&a.wins);
        match tie_break {
            TieBreak::Registration => by_wins,
            TieBreak::FewerMatches => by_wins.then_with(|| {
                match (provider.opponent_count(a.id), provider.opponent_count(b.id)) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    _ => Ordering::Equal,
                }
            }),
        }
    });
    ranked
}
