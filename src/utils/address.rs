//! Base58check chain addresses
//!
//! The keeper's authority must be a well-formed chain address:
//! version byte, public key hash, and a 4-byte double-SHA256 checksum,
//! base58 encoded.

use crate::utils::{base58_decode, base58_encode, ripemd160_digest, sha256_digest};

const VERSION: u8 = 0x00;
pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

fn checksum(payload: &[u8]) -> Vec<u8> {
    let first_sha = sha256_digest(payload);
    let second_sha = sha256_digest(first_sha.as_slice());
    second_sha[0..ADDRESS_CHECK_SUM_LEN].to_vec()
}

/// Check that `address` is a well-formed base58check chain address
pub fn validate_address(address: &str) -> bool {
    let payload = match base58_decode(address) {
        Ok(payload) => payload,
        Err(_) => return false,
    };

    if payload.len() < ADDRESS_CHECK_SUM_LEN + 1 {
        return false;
    }

    let actual_checksum = payload[payload.len() - ADDRESS_CHECK_SUM_LEN..].to_vec();
    let version = payload[0];
    let pub_key_hash = payload[1..payload.len() - ADDRESS_CHECK_SUM_LEN].to_vec();

    let mut target_vec = vec![];
    target_vec.push(version);
    target_vec.extend(pub_key_hash);
    let target_checksum = checksum(target_vec.as_slice());
    actual_checksum.eq(target_checksum.as_slice())
}

/// Derive an address from a public key hash
pub fn convert_address(pub_key_hash: &[u8]) -> String {
    let mut payload: Vec<u8> = vec![];
    payload.push(VERSION);
    payload.extend(pub_key_hash);
    let checksum = checksum(payload.as_slice());
    payload.extend(checksum.as_slice());
    base58_encode(payload.as_slice())
}

/// SHA256 followed by RIPEMD160, the standard public key hash
pub fn hash_pub_key(pub_key: &[u8]) -> Vec<u8> {
    let pub_key_sha256 = sha256_digest(pub_key);
    ripemd160_digest(pub_key_sha256.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_address_validates() {
        let pub_key_hash = hash_pub_key(b"some public key bytes");
        let address = convert_address(&pub_key_hash);
        assert!(validate_address(&address));
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        assert!(!validate_address(""));
        assert!(!validate_address("not-base58-0OIl"));
        assert!(!validate_address("abc"));

        // Corrupt the checksum of an otherwise valid address
        let address = convert_address(&hash_pub_key(b"key"));
        let mut corrupted = address.chars().collect::<Vec<_>>();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == '1' { '2' } else { '1' };
        let corrupted: String = corrupted.into_iter().collect();
        assert!(!validate_address(&corrupted));
    }

    #[test]
    fn test_known_address_validates() {
        assert!(validate_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
    }
}
