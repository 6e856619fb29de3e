use swiss_core::PlayerId;
use thiserror::Error;

/// A write that would break a tournament invariant. Nothing is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("players {winner} and {loser} have already played each other")]
    Rematch { winner: PlayerId, loser: PlayerId },

    #[error("player {0} is not registered")]
    UnknownPlayer(PlayerId),

    #[error("player name must not be blank")]
    BlankName,
}

/// Errors that can occur in the tournament store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn violation(&self) -> Option<&ConstraintViolation> {
        match self {
            StoreError::Constraint(v) => Some(v),
            _ => None,
        }
    }
}
