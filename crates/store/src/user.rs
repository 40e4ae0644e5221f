//! Store-owned user identity records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use claimgate_core::{Email, UserId};

/// A persisted user identity.
///
/// The password credential is owned by the store and never appears on this
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Identity attributes for a user about to be created.
///
/// The store assigns the id and timestamps during credential creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
}

impl NewUser {
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
        }
    }
}
