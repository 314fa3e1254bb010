//! Blake2b hashing and the attestation message digest.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Domain tag prepended to every attestation message before hashing.
///
/// The signed payload is `TAG ++ decimal byte length of message ++ message`,
/// the standard prefixed personal-message convention. Signing the tagged
/// digest rather than the raw message keeps attestation signatures from
/// being replayable as signatures over arbitrary protocol data.
pub const ATTESTATION_TAG: &str = "\x19Stakereg Signed Attestation:\n";

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Digest an attestation message with the personal-message prefix convention.
///
/// `digest = Blake2b-256(ATTESTATION_TAG ++ len(message) as decimal ++ message)`
pub fn attestation_digest(message: &[u8]) -> [u8; 32] {
    let len = message.len().to_string();
    blake2b_256_multi(&[ATTESTATION_TAG.as_bytes(), len.as_bytes(), message])
}
