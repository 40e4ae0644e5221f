//! Static policy-to-claims catalog and claim synthesis.
//!
//! The catalog is a pure total function over [`Policy`]; unknown policy
//! names are rejected at parse time, before any claims are derived.

use claimgate_core::Email;
use serde::{Deserialize, Serialize};

use crate::claim::{Capability, Claim, ClaimType};
use crate::policy::Policy;

/// The boolean capability grants of one policy (or one update request).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grants {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub read: bool,
    pub manage_user: bool,
}

impl Grants {
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::Create => self.create,
            Capability::Update => self.update,
            Capability::Delete => self.delete,
            Capability::Read => self.read,
            Capability::ManageUser => self.manage_user,
        }
    }
}

/// Capability grants for a policy.
pub fn grants_for(policy: Policy) -> Grants {
    match policy {
        Policy::Admin => Grants {
            create: true,
            update: true,
            delete: true,
            read: true,
            manage_user: true,
        },
        Policy::Manager => Grants {
            create: true,
            update: true,
            delete: false,
            read: true,
            manage_user: false,
        },
        Policy::User => Grants {
            create: false,
            update: false,
            delete: false,
            read: false,
            manage_user: false,
        },
    }
}

/// Canonical claim set for a policy, substituting the user's identity
/// attributes.
///
/// Identity claims come first (`Email`, `Role`, `Name`), followed by the
/// five capability claims. The capability order is part of the catalog
/// definition and differs per policy.
pub fn claims_for(policy: Policy, email: &Email, name: &str) -> Vec<Claim> {
    let grants = grants_for(policy);
    let capability_order = match policy {
        Policy::Admin => [
            Capability::Create,
            Capability::Update,
            Capability::Delete,
            Capability::Read,
            Capability::ManageUser,
        ],
        Policy::Manager => [
            Capability::Create,
            Capability::Update,
            Capability::Read,
            Capability::ManageUser,
            Capability::Delete,
        ],
        Policy::User => [
            Capability::Create,
            Capability::Update,
            Capability::Delete,
            Capability::ManageUser,
            Capability::Read,
        ],
    };

    let mut claims = vec![
        Claim::new(ClaimType::Email, email.as_str()),
        Claim::new(ClaimType::Role, policy.as_str()),
        Claim::new(ClaimType::Name, name),
    ];
    claims.extend(
        capability_order
            .into_iter()
            .map(|c| Claim::flag(c, grants.get(c))),
    );
    claims
}

/// String-keyed catalog entry point.
///
/// Unknown or empty policy names yield an empty sequence; callers must
/// treat that as a validation failure.
pub fn claims_for_name(policy_name: &str, email: &Email, name: &str) -> Vec<Claim> {
    match policy_name.parse::<Policy>() {
        Ok(policy) => claims_for(policy, email, name),
        Err(_) => Vec::new(),
    }
}

/// Replacement claim set for a claim-update request.
///
/// The role name is taken verbatim from the request and the capability
/// flags come from the request rather than the catalog; the `Name` claim is
/// not part of the replacement set.
pub fn replacement_claims(email: &Email, role_name: &str, grants: Grants) -> Vec<Claim> {
    let mut claims = vec![
        Claim::new(ClaimType::Email, email.as_str()),
        Claim::new(ClaimType::Role, role_name),
    ];
    claims.extend(
        Capability::ALL
            .into_iter()
            .map(|c| Claim::flag(c, grants.get(c))),
    );
    claims
}
