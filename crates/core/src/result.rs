//! Uniform success/failure contract for account operations.

use serde::{Deserialize, Serialize};

/// Outcome of an account operation.
///
/// Expected failures (not-found, conflict, validation, store rejection) are
/// reported as values through this type rather than as errors; `message`
/// carries a short, stable, human-readable diagnostic on failure and may be
/// absent on success. No internal identifiers or backtraces leak through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResult {
    pub success: bool,
    pub message: Option<String>,
}

impl ServiceResult {
    /// Success without a message.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Success with a message.
    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// Failure with a diagnostic message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
