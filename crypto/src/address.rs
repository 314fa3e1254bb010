//! Actor address derivation from public keys.
//!
//! Address format: `stkr_` + base32(public_key || checksum), 60 characters.
//!
//! Checksum: first 5 bytes of Blake2b-256(public_key), appended to the key
//! before encoding, so the whole payload is encoded in a single pass.
//! Base32 alphabet: RFC 4648 lowercase (`a-z2-7`).
//! Total address length: 5 (prefix) + 60 = 65 characters.

use stakereg_types::{ActorAddress, PublicKey};

/// RFC 4648 base32 alphabet, lowercased.
const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Reverse lookup table: ASCII byte -> 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Payload: 32 public key bytes + 5 checksum bytes.
const PAYLOAD_LEN: usize = 37;
/// Encoded length: ceil(37 * 8 / 5) = 60 characters.
const ENCODED_LEN: usize = 60;
/// Checksum width in bytes.
const CHECKSUM_LEN: usize = 5;

fn encode_base32(bytes: &[u8]) -> String {
    let num_chars = (bytes.len() * 8).div_ceil(5);
    let mut result = String::with_capacity(num_chars);
    let mut buffer: u64 = 0;
    let mut bits = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            result.push(BASE32_ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
    }
    // Trailing bits, zero-padded on the right.
    if bits > 0 {
        result.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    result
}

fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            if pos < N {
                result[pos] = (buffer >> bits) as u8;
                pos += 1;
            }
        }
    }

    if pos < N {
        return None;
    }
    Some(result)
}

/// Derive a `stkr_`-prefixed actor address from a public key.
///
/// Process:
/// 1. checksum = Blake2b-256(public_key)[0..5]
/// 2. payload = public_key || checksum
/// 3. address = "stkr_" + base32(payload)
///
/// Deriving the address from a verified public key is what binds an
/// attestation signature to an actor identity.
pub fn derive_address(public_key: &PublicKey) -> ActorAddress {
    let hash = crate::blake2b_256(public_key.as_bytes());
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[..32].copy_from_slice(public_key.as_bytes());
    payload[32..].copy_from_slice(&hash[..CHECKSUM_LEN]);
    ActorAddress::new(format!("{}{}", ActorAddress::PREFIX, encode_base32(&payload)))
}

/// Extract the public key bytes from a valid actor address.
///
/// Returns `None` if the address is malformed or its checksum is wrong.
pub fn decode_address(address: &str) -> Option<[u8; 32]> {
    let encoded = address.strip_prefix(ActorAddress::PREFIX)?;
    if encoded.len() != ENCODED_LEN {
        return None;
    }

    let payload: [u8; PAYLOAD_LEN] = decode_base32_fixed(encoded)?;
    let (pubkey_bytes, checksum) = payload.split_at(32);

    let expected = &crate::blake2b_256(pubkey_bytes)[..CHECKSUM_LEN];
    if checksum != expected {
        return None;
    }

    pubkey_bytes.try_into().ok()
}

/// Validate that an address string is well-formed with a correct checksum.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn derive_and_validate() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public);
        assert!(addr.as_str().starts_with("stkr_"));
        assert_eq!(addr.as_str().len(), 65);
        assert!(addr.is_valid());
        assert!(validate_address(addr.as_str()));
    }

    #[test]
    fn derive_is_deterministic() {
        let kp = keypair_from_seed(&[7u8; 32]);
        assert_eq!(
            derive_address(&kp.public).as_str(),
            derive_address(&kp.public).as_str()
        );
    }

    #[test]
    fn decode_roundtrip() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public);
        let decoded = decode_address(addr.as_str()).unwrap();
        assert_eq!(decoded, *kp.public.as_bytes());
    }

    #[test]
    fn invalid_prefix_rejected() {
        let kp = generate_keypair();
        let addr = derive_address(&kp.public);
        let swapped = addr.as_str().replacen("stkr_", "xkey_", 1);
        assert!(!validate_address(&swapped));
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let kp = generate_keypair();
        let mut bad = derive_address(&kp.public).as_str().to_string();
        let last = bad.pop().unwrap();
        bad.push(if last == 'a' { 'b' } else { 'a' });
        assert!(!validate_address(&bad));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!validate_address("stkr_tooshort"));
        assert!(!validate_address("stkr_"));
    }

    #[test]
    fn invalid_characters_rejected() {
        // '0' and '1' are not in the RFC 4648 alphabet.
        let bad = format!("stkr_{:0>60}", "0");
        assert!(!validate_address(&bad));
    }

    #[test]
    fn base32_roundtrip() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x42];
        let encoded = encode_base32(&data);
        let decoded: [u8; 5] = decode_base32_fixed(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn different_keys_different_addresses() {
        let k1 = keypair_from_seed(&[1u8; 32]);
        let k2 = keypair_from_seed(&[2u8; 32]);
        assert_ne!(
            derive_address(&k1.public).as_str(),
            derive_address(&k2.public).as_str()
        );
    }
}
