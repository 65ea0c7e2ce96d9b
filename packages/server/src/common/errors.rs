use thiserror::Error;

use super::RecordKind;

/// Failure of a record store operation (connectivity, query, constraint).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Failure of an expiry routine. Both routines propagate this to the caller;
/// deciding whether to log-and-continue is left to the scheduler.
#[derive(Error, Debug)]
pub enum ExpiryError {
    #[error("Failed to expire {kind} records: {source}")]
    Store {
        kind: RecordKind,
        #[source]
        source: StoreError,
    },
}

impl ExpiryError {
    pub fn store(kind: RecordKind, source: StoreError) -> Self {
        ExpiryError::Store { kind, source }
    }

    /// The record collection the failed routine was acting on.
    pub fn kind(&self) -> RecordKind {
        match self {
            ExpiryError::Store { kind, .. } => *kind,
        }
    }
}
