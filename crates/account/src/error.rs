//! Orchestrator error model.
//!
//! Expected conditions (not-found, conflict, validation, store rejection)
//! are reported as `ServiceResult` values, not errors. Only two things
//! travel through `Err`: a broken internal consistency assumption, and a
//! store failure while enumerating users (where there is no per-record
//! result to degrade to).

use thiserror::Error;

use claimgate_store::StoreError;

/// Result type for orchestrator operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Fatal orchestrator error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// An internal consistency assumption broke (e.g. a user vanished
    /// between creation and claim attachment, or a compensating restore
    /// failed). Never retried, never swallowed.
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// The identity store failed while listing users.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}
