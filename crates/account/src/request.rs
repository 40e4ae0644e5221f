//! Request records for the caller-facing operations.
//!
//! Field-level input validation (email format, password complexity) is a
//! transport-adapter concern and runs before these reach the service; the
//! service does not re-validate format.

use serde::{Deserialize, Serialize};

use claimgate_core::UserId;
use claimgate_policy::Grants;

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Requested policy name, matched case-insensitively.
    pub policy: String,
}

/// Authentication request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Claim-update request: wholly replaces the user's claim set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserClaimsRequest {
    pub user_id: UserId,
    pub role_name: String,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub read: bool,
    pub manage_user: bool,
}

impl UpdateUserClaimsRequest {
    /// The requested capability flags as a catalog grants value.
    pub fn grants(&self) -> Grants {
        Grants {
            create: self.create,
            update: self.update,
            delete: self.delete,
            read: self.read,
            manage_user: self.manage_user,
        }
    }
}
