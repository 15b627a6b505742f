//! Utility functions and helpers
//!
//! This module contains serialization helpers, digest and encoding
//! functions, and chain address validation.

pub mod address;
pub mod crypto;
pub mod serialization;

pub use address::{convert_address, hash_pub_key, validate_address, ADDRESS_CHECK_SUM_LEN};
pub use crypto::{base58_decode, base58_encode, ripemd160_digest, sha256_digest};
pub use serialization::{deserialize, serialize};
