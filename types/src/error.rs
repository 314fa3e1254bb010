//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the stakereg workspace.
///
/// Crate-level errors (e.g. `stakereg_registry::RegistryError`) convert into
/// this enum at the workspace boundary so embedders handle one type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StakeregError {
    #[error("insufficient balance: claimed {claimed}, live balance {available}")]
    InsufficientBalance { claimed: u128, available: u128 },

    #[error("caller {0} does not hold the facilitator role")]
    Unauthorized(String),

    #[error("attestation signature does not verify for actor {0}")]
    InvalidSignature(String),
}
