// Account references carried by contact and account export QR codes
use crate::core::NetworkType;
use crate::utils::{
    base58_decode, base58_encode, double_sha256_checksum, ripemd160_digest, sha256_digest,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

/// Public identity of an account. Whatever string the QR carried is kept
/// as-is; use [`Account::is_valid_address`] when the caller wants to check it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(identifier: impl Into<String>) -> Account {
        Account(identifier.into())
    }

    /// Derive the base58check address of a public key on `network`:
    /// network byte + RIPEMD160(SHA256(key)) + checksum
    pub fn from_public_key(network: NetworkType, public_key: &[u8]) -> Account {
        let mut payload: Vec<u8> = vec![network.code()];
        payload.extend(hash_pub_key(public_key));
        let checksum = double_sha256_checksum(payload.as_slice(), ADDRESS_CHECK_SUM_LEN);
        payload.extend(checksum);
        Account(base58_encode(payload.as_slice()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_valid_address(&self) -> bool {
        let payload = match base58_decode(&self.0) {
            Ok(payload) => payload,
            Err(_) => return false,
        };

        if payload.len() < ADDRESS_CHECK_SUM_LEN + 1 {
            return false;
        }

        let (body, actual_checksum) = payload.split_at(payload.len() - ADDRESS_CHECK_SUM_LEN);
        double_sha256_checksum(body, ADDRESS_CHECK_SUM_LEN) == actual_checksum
    }

    /// Network encoded in the address version byte, if it is a known one
    pub fn network(&self) -> Option<NetworkType> {
        if !self.is_valid_address() {
            return None;
        }
        let payload = base58_decode(&self.0).ok()?;
        NetworkType::from_code(u64::from(*payload.first()?)).ok()
    }
}

pub fn hash_pub_key(pub_key: &[u8]) -> Vec<u8> {
    let pub_key_sha256 = sha256_digest(pub_key);
    ripemd160_digest(pub_key_sha256.as_slice())
}

impl From<&str> for Account {
    fn from(identifier: &str) -> Self {
        Account::new(identifier)
    }
}

impl From<String> for Account {
    fn from(identifier: String) -> Self {
        Account(identifier)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
