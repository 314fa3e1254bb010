//! Fundamental types for the stakereg holdings registry.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: actor addresses, token amounts, role identifiers, key material,
//! and the shared top-level error enum.

pub mod address;
pub mod amount;
pub mod error;
pub mod keys;
pub mod role;

pub use address::ActorAddress;
pub use amount::TokenAmount;
pub use error::StakeregError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use role::RoleId;
