//! Registration errors.
//!
//! All variants are terminal for the call that produced them and are never
//! partially applied: a rejected registration leaves no store mutation and
//! no audit record.

use stakereg_types::{ActorAddress, StakeregError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The claimed amount exceeds the subject's live balance. Recoverable by
    /// lowering the amount or raising the balance and re-issuing the call.
    #[error("insufficient balance: claimed {claimed}, live balance {available}")]
    InsufficientBalance { claimed: u128, available: u128 },

    /// The caller does not hold the facilitator role. Recoverable only by an
    /// external role reassignment.
    #[error("caller {0} does not hold the facilitator role")]
    Unauthorized(ActorAddress),

    /// The attestation signature does not verify against the named actor.
    #[error("attestation signature does not verify for actor {0}")]
    InvalidSignature(ActorAddress),
}

impl From<RegistryError> for StakeregError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InsufficientBalance { claimed, available } => {
                StakeregError::InsufficientBalance { claimed, available }
            }
            RegistryError::Unauthorized(addr) => StakeregError::Unauthorized(addr.to_string()),
            RegistryError::InvalidSignature(addr) => {
                StakeregError::InvalidSignature(addr.to_string())
            }
        }
    }
}
