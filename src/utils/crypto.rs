use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::{QrError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the unix epoch
pub fn current_timestamp() -> Result<u64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| QrError::Transaction(format!("System time error: {e}")))?;
    Ok(duration.as_secs())
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// First `len` bytes of SHA256(SHA256(data))
pub fn double_sha256_checksum(data: &[u8], len: usize) -> Vec<u8> {
    let first_sha = sha256_digest(data);
    let second_sha = sha256_digest(first_sha.as_slice());
    second_sha[0..len.min(second_sha.len())].to_vec()
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| QrError::Serialization(format!("Invalid base58 encoding: {e}")))
}
