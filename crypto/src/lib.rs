//! Cryptographic primitives for the stakereg holdings registry.
//!
//! - **Ed25519** for attestation signing and verification
//! - **Blake2b** for hashing and the prefixed attestation digest
//! - Address derivation with `stkr_` prefix and base32 encoding

pub mod address;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{decode_address, derive_address, validate_address};
pub use hash::{attestation_digest, blake2b_256, blake2b_256_multi, ATTESTATION_TAG};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_attestation, sign_message, verify_attestation, verify_signature};
