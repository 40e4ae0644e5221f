//! Named authorization policies.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named bundle of capability claims assigned at user creation/update.
///
/// Policies are fixed at compile time and never user-extensible; dynamic or
/// per-resource policies are explicitly out of scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Admin,
    Manager,
    User,
}

impl Policy {
    /// All defined policies, in catalog order.
    pub const ALL: [Policy; 3] = [Policy::Admin, Policy::Manager, Policy::User];

    /// The role name stored in the user's `Role` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Admin => "Admin",
            Policy::Manager => "Manager",
            Policy::User => "User",
        }
    }
}

impl core::fmt::Display for Policy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a policy name does not match any defined policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy: {0:?}")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    /// Case-insensitive match on the policy name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        for policy in Policy::ALL {
            if name.eq_ignore_ascii_case(policy.as_str()) {
                return Ok(policy);
            }
        }
        Err(UnknownPolicy(s.to_string()))
    }
}
