use thiserror::Error;

use crate::types::PlayerId;

/// Standings and ledger disagree about who is in the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("player {0} appears more than once in the standings")]
    DuplicateStanding(PlayerId),

    #[error("player {0} is in the standings but unknown to the match history")]
    MissingFromLedger(PlayerId),

    #[error("player {0} is in the match history but missing from the standings")]
    MissingFromStandings(PlayerId),
}

/// Errors that can occur while pairing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("no pairing of the {players} remaining players avoids a rematch")]
    Impossible { players: usize },

    #[error("inconsistent pairing input: {0}")]
    InputInconsistency(#[from] Inconsistency),
}
