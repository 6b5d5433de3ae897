//! Utility functions and helpers
//!
//! Hashing, base58 and hex encoding, and the bincode layer used for
//! transaction payloads.

pub mod crypto;
pub mod serialization;

pub use crypto::{
    base58_decode, base58_encode, current_timestamp, double_sha256_checksum, ripemd160_digest,
    sha256_digest,
};

pub use serialization::{deserialize, hex_decode, hex_encode, serialize};
