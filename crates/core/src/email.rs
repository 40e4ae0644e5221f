//! Case-insensitive email value object.
//!
//! Emails are unique account keys, compared case-insensitively. Format
//! validation is a caller concern (declarative validation runs before the
//! core is invoked), so construction never fails; this type only fixes the
//! comparison semantics in one place.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An email address compared and hashed case-insensitively.
///
/// The original casing is preserved for display; equality and hashing use
/// the ASCII-lowercased form so that `Eq` and `Hash` stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used as the lookup/uniqueness key.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_case() {
        assert_eq!(Email::new("Ann@Example.com"), Email::new("ann@example.COM"));
        assert_ne!(Email::new("ann@example.com"), Email::new("bob@example.com"));
    }

    #[test]
    fn hash_is_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Email::new("Ann@Example.com"));
        assert!(set.contains(&Email::new("ANN@EXAMPLE.COM")));
    }

    #[test]
    fn preserves_original_casing_for_display() {
        let email = Email::new(" Ann@Example.com ");
        assert_eq!(email.as_str(), "Ann@Example.com");
        assert_eq!(email.normalized(), "ann@example.com");
    }
}
