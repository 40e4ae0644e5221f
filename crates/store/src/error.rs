//! Identity store error model.

use thiserror::Error;

/// Result type for identity store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Identity store operation error.
///
/// `Rejected` carries the store's human-readable reasons (one entry per
/// failed check, e.g. each violated password rule); callers surface them by
/// joining with newlines. `Unavailable` covers backend failures and aborted
/// in-flight calls, which callers treat as an ordinary failure of the
/// corresponding step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{}", .0.join("\n"))]
    Rejected(Vec<String>),

    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(vec![reason.into()])
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// All error descriptions joined with newline separators.
    pub fn joined(&self) -> String {
        match self {
            StoreError::Rejected(reasons) => reasons.join("\n"),
            StoreError::Unavailable(reason) => reason.clone(),
        }
    }
}
