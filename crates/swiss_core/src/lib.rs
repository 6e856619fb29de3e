//! Swiss-system pairing
//!
//! This crate computes the next round of a Swiss tournament from:
//! - the current standings (see [`StandingsProvider`])
//! - the set of pairs that have already met (see [`RematchLedger`])
//!
//! Pairing is a pure function of those two snapshots. Storage, reporting and
//! the command line live in the `tournament_store` and `tournament` crates.
//!
//! # Usage
//!
//! ```
//! use swiss_core::{MatchHistory, PairingConfig, PlayerId, Standing, Standings, SwissPairer};
//!
//! let ids: Vec<PlayerId> = (1..=4).map(PlayerId::new).collect();
//! let standings: Standings = ids
//!     .iter()
//!     .map(|&id| Standing::new(id, format!("Player {id}")))
//!     .collect();
//! let history = MatchHistory::new(ids.iter().copied());
//!
//! let round = SwissPairer::new(PairingConfig::default())
//!     .pair_round(&standings, &history)
//!     .unwrap();
//! assert_eq!(round.pairs.len(), 2);
//! ```

mod error;
mod ledger;
pub mod matching;
mod pairing;
mod standings;
mod types;

pub use error::*;
pub use ledger::*;
pub use pairing::*;
pub use standings::*;
pub use types::*;
