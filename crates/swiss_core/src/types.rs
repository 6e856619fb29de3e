use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned player identity. Ordering follows registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlayerId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A player's record at a point in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    /// Matches won
    pub wins: u32,
    /// Matches played, won or lost
    pub matches: u32,
    /// Rounds sat out
    #[serde(default)]
    pub byes: u32,
}

impl Standing {
    /// A freshly registered player with no record.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
            byes: 0,
        }
    }

    pub fn with_record(mut self, wins: u32, matches: u32) -> Self {
        self.wins = wins;
        self.matches = matches;
        self
    }

    pub fn with_byes(mut self, byes: u32) -> Self {
        self.byes = byes;
        self
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }

    pub fn seat(&self) -> Seat {
        Seat {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// One side of a pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

/// Two players who meet in the coming round. `first` is the higher ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub first: Seat,
    pub second: Seat,
}

impl Pair {
    /// `(id1, name1, id2, name2)`
    pub fn as_tuple(&self) -> (PlayerId, &str, PlayerId, &str) {
        (
            self.first.id,
            self.first.name.as_str(),
            self.second.id,
            self.second.name.as_str(),
        )
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.first.id == player || self.second.id == player
    }
}

/// The full pairing for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairing {
    /// Pairs in rank order of their higher seat
    pub pairs: Vec<Pair>,
    /// Set only when the population is odd
    pub bye: Option<Seat>,
}

impl RoundPairing {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.bye.is_none()
    }

    /// Every player id that appears in this round, bye included.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.first.id, pair.second.id])
            .chain(self.bye.iter().map(|seat| seat.id))
    }

    pub fn tuples(&self) -> Vec<(PlayerId, &str, PlayerId, &str)> {
        self.pairs.iter().map(Pair::as_tuple).collect()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
