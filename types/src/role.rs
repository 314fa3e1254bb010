//! Authority role identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque role identifier resolved by the external authority oracle.
///
/// The registry is configured with a single designated facilitator role at
/// construction and never interprets the identifier's content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(String);

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
