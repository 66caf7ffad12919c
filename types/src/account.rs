//! Opaque account identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque participant or administrator identity.
///
/// The ledger never interprets the contents — an address, an account name,
/// or any other unique key the host authenticates. The only structural
/// requirement is that it is non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account id from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identity is usable (non-empty after trimming).
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account() {
        assert!(AccountId::new("0x1234").is_valid());
    }

    #[test]
    fn test_empty_account_invalid() {
        assert!(!AccountId::new("").is_valid());
        assert!(!AccountId::new("   ").is_valid());
    }

    #[test]
    fn test_display_round_trip() {
        let id = AccountId::new("alice");
        assert_eq!(id.to_string(), "alice");
        assert_eq!(id.as_str(), "alice");
    }
}
