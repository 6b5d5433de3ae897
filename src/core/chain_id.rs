// Chain identifier: the genesis hash of the target chain
use crate::error::{QrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Genesis hash substituted when no chain id is given
pub const DEFAULT_CHAIN_ID: &str =
    "E2A9F95E129283EF47B92A62FD748DBA4D32AA718AE6F8AC99C105CFA9F27A31";

pub const CHAIN_ID_HEX_LEN: usize = 64;

/// A 64 character hex string. The case it was given in is preserved so that
/// a decoded envelope serializes back to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(String);

impl ChainId {
    pub fn new(id: &str) -> Result<ChainId> {
        if id.len() != CHAIN_ID_HEX_LEN || hex::decode(id).is_err() {
            return Err(QrError::InvalidChainId(id.to_string()));
        }
        Ok(ChainId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The 32 raw hash bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        // validated in `new`
        hex::decode(&self.0).unwrap_or_default()
    }
}

impl Default for ChainId {
    fn default() -> Self {
        ChainId(DEFAULT_CHAIN_ID.to_string())
    }
}

impl FromStr for ChainId {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        ChainId::new(s)
    }
}

impl TryFrom<String> for ChainId {
    type Error = QrError;

    fn try_from(id: String) -> Result<Self> {
        ChainId::new(&id)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> String {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_genesis_hash() {
        assert_eq!(ChainId::default().as_str(), DEFAULT_CHAIN_ID);
        assert_eq!(ChainId::default().to_bytes().len(), 32);
    }

    #[test]
    fn test_accepts_either_case() {
        let lower = DEFAULT_CHAIN_ID.to_lowercase();
        let id = ChainId::new(&lower).unwrap();
        assert_eq!(id.as_str(), lower);
        assert_ne!(id, ChainId::default());
    }

    #[test]
    fn test_rejects_bad_ids() {
        assert!(matches!(ChainId::new(""), Err(QrError::InvalidChainId(_))));
        assert!(ChainId::new("E2A9").is_err());
        let not_hex = "Z".repeat(CHAIN_ID_HEX_LEN);
        assert!(ChainId::new(&not_hex).is_err());
        let too_long = format!("{DEFAULT_CHAIN_ID}00");
        assert!(ChainId::new(&too_long).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let json = format!("\"{DEFAULT_CHAIN_ID}\"");
        let id: ChainId = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
        assert!(serde_json::from_str::<ChainId>("\"abc\"").is_err());
    }
}
