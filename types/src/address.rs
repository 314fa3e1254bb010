//! Actor address type with `stkr_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of an ecosystem actor, always prefixed with `stkr_`.
///
/// Derived from the actor's Ed25519 public key via Blake2b checksumming and
/// base32 encoding (see `stakereg_crypto::derive_address`). Addresses are
/// fixed-width: 5 prefix characters plus 60 encoded characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorAddress(String);

impl ActorAddress {
    /// The standard prefix for all stakereg actor addresses.
    pub const PREFIX: &'static str = "stkr_";

    /// Total address length: prefix + 52 pubkey chars + 8 checksum chars.
    pub const LEN: usize = 65;

    /// Create a new actor address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `stkr_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with stkr_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that this address is well-formed (prefix and width only;
    /// checksum validation lives in the crypto crate).
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() == Self::LEN
    }
}

impl fmt::Display for ActorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActorAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_string() {
        let addr = ActorAddress::new(format!("stkr_{:0>60}", "a"));
        assert!(addr.as_str().starts_with("stkr_"));
        assert!(addr.is_valid());
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_prefix() {
        ActorAddress::new("addr_not_ours");
    }

    #[test]
    fn wrong_width_is_invalid() {
        let addr = ActorAddress::new("stkr_short");
        assert!(!addr.is_valid());
    }

    #[test]
    fn display_matches_raw() {
        let raw = format!("stkr_{:0>60}", "b");
        let addr = ActorAddress::new(raw.clone());
        assert_eq!(addr.to_string(), raw);
    }
}
