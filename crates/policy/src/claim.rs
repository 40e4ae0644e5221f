//! Capability claim model.
//!
//! A claim is a `(type, value)` pair attached to a user. Identity claims
//! (`Email`, `Role`, `Name`) carry free-form values; capability claims
//! carry the literal strings `"true"`/`"false"`.

use serde::{Deserialize, Serialize};

/// The type tag of a capability claim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Email,
    Role,
    Name,
    Create,
    Update,
    Delete,
    Read,
    ManageUser,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Email => "Email",
            ClaimType::Role => "Role",
            ClaimType::Name => "Name",
            ClaimType::Create => "Create",
            ClaimType::Update => "Update",
            ClaimType::Delete => "Delete",
            ClaimType::Read => "Read",
            ClaimType::ManageUser => "ManageUser",
        }
    }
}

impl core::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boolean capability. Subset of [`ClaimType`] with guaranteed
/// `"true"`/`"false"` values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Create,
    Update,
    Delete,
    Read,
    ManageUser,
}

impl Capability {
    /// All capabilities, in canonical order.
    pub const ALL: [Capability; 5] = [
        Capability::Create,
        Capability::Update,
        Capability::Delete,
        Capability::Read,
        Capability::ManageUser,
    ];

    pub fn claim_type(&self) -> ClaimType {
        match self {
            Capability::Create => ClaimType::Create,
            Capability::Update => ClaimType::Update,
            Capability::Delete => ClaimType::Delete,
            Capability::Read => ClaimType::Read,
            Capability::ManageUser => ClaimType::ManageUser,
        }
    }
}

/// A single typed permission or identity attribute attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: ClaimType,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: ClaimType, value: impl Into<String>) -> Self {
        Self {
            claim_type,
            value: value.into(),
        }
    }

    /// A capability claim with a `"true"`/`"false"` value.
    pub fn flag(capability: Capability, granted: bool) -> Self {
        Self::new(capability.claim_type(), if granted { "true" } else { "false" })
    }

    /// Interpret the value as a boolean flag.
    ///
    /// Anything other than a case-insensitive `"true"` reads as `false`, so
    /// a malformed value degrades to "not granted" instead of failing.
    pub fn as_flag(&self) -> bool {
        self.value.trim().eq_ignore_ascii_case("true")
    }
}

/// First claim value of the given type, if present.
pub fn find_value(claims: &[Claim], claim_type: ClaimType) -> Option<&str> {
    claims
        .iter()
        .find(|c| c.claim_type == claim_type)
        .map(|c| c.value.as_str())
}

/// Boolean capability read, defaulting to `false` when absent or unparsable.
pub fn find_flag(claims: &[Claim], capability: Capability) -> bool {
    claims
        .iter()
        .find(|c| c.claim_type == capability.claim_type())
        .is_some_and(Claim::as_flag)
}
