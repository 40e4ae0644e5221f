//! User-facing "who can do what" projection.

use serde::{Deserialize, Serialize};

use claimgate_core::UserId;
use claimgate_policy::{claim, Capability, Claim, ClaimType};

/// Capability flags and identity attributes of one user, as derived from
/// their claim set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithClaims {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role_name: Option<String>,
    pub name: Option<String>,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub read: bool,
    pub manage_user: bool,
}

impl UserWithClaims {
    /// Project a claim set into the capability view.
    ///
    /// Returns `None` for an empty claim set (such users are excluded from
    /// listings). Identity attributes are optional — a missing `Name` or
    /// `Role` claim leaves the field empty rather than failing — and
    /// capability flags default to `false` when absent or unparsable.
    pub fn project(user_id: UserId, claims: &[Claim]) -> Option<Self> {
        if claims.is_empty() {
            return None;
        }

        Some(Self {
            user_id,
            email: claim::find_value(claims, ClaimType::Email).map(str::to_string),
            role_name: claim::find_value(claims, ClaimType::Role).map(str::to_string),
            name: claim::find_value(claims, ClaimType::Name).map(str::to_string),
            create: claim::find_flag(claims, Capability::Create),
            update: claim::find_flag(claims, Capability::Update),
            delete: claim::find_flag(claims, Capability::Delete),
            read: claim::find_flag(claims, Capability::Read),
            manage_user: claim::find_flag(claims, Capability::ManageUser),
        })
    }
}
