//! Ed25519 signing and verification for attestation messages.
//!
//! Attestation signatures are made over the prefixed digest from
//! `hash::attestation_digest`, never over the raw message. This is the
//! registry's `recoverAndVerify` collaborator: a signature is bound to an
//! actor by verifying it against the actor's public key, from which the
//! actor address is derived.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use stakereg_types::{PrivateKey, PublicKey, Signature};

use crate::hash::attestation_digest;

/// Sign arbitrary bytes with a private key, returning the signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a signature against arbitrary bytes and a public key.
///
/// Returns `true` if the signature is valid, `false` otherwise (including
/// for malformed public keys).
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

/// Sign an attestation message (prefixed-digest convention).
pub fn sign_attestation(message: &[u8], private_key: &PrivateKey) -> Signature {
    sign_message(&attestation_digest(message), private_key)
}

/// Verify an attestation signature against the claimed author's public key.
pub fn verify_attestation(message: &[u8], signature: &Signature, author: &PublicKey) -> bool {
    verify_signature(&attestation_digest(message), signature, author)
}
