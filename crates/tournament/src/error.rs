use swiss_core::{Inconsistency, PairingError};
use thiserror::Error;
use tournament_store::{ConstraintViolation, StoreError};

/// Errors surfaced by the tournament director.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(ConstraintViolation),

    #[error("pairing impossible: every pairing of the {players} remaining players repeats a match")]
    PairingImpossible { players: usize },

    /// Storage and pairing disagree about the player population. Not
    /// recoverable by retrying.
    #[error("standings and match history are inconsistent: {0}")]
    InputInconsistency(Inconsistency),

    #[error("storage error: {0}")]
    Storage(StoreError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("report error: {0}")]
    Report(String),
}

impl From<StoreError> for TournamentError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint(violation) => TournamentError::ConstraintViolation(violation),
            other => TournamentError::Storage(other),
        }
    }
}

impl From<PairingError> for TournamentError {
    fn from(err: PairingError) -> Self {
        match err {
            PairingError::Impossible { players } => TournamentError::PairingImpossible { players },
            PairingError::InputInconsistency(detail) => TournamentError::InputInconsistency(detail),
        }
    }
}
