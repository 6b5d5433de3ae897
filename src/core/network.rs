// Network selectors carried in the envelope `network_id` field
use crate::error::{QrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which network a QR payload targets. The discriminant is the
/// wire code and also the version byte of addresses on that network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u64")]
pub enum NetworkType {
    MainNet = 104,
    #[default]
    TestNet = 152,
    Mijin = 96,
    MijinTest = 144,
}

impl NetworkType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u64) -> Result<NetworkType> {
        match code {
            104 => Ok(NetworkType::MainNet),
            152 => Ok(NetworkType::TestNet),
            96 => Ok(NetworkType::Mijin),
            144 => Ok(NetworkType::MijinTest),
            _ => Err(QrError::InvalidNetwork(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::MainNet => "main_net",
            NetworkType::TestNet => "test_net",
            NetworkType::Mijin => "mijin",
            NetworkType::MijinTest => "mijin_test",
        }
    }
}

impl From<NetworkType> for u8 {
    fn from(network: NetworkType) -> u8 {
        network.code()
    }
}

impl TryFrom<u64> for NetworkType {
    type Error = QrError;

    fn try_from(code: u64) -> Result<Self> {
        NetworkType::from_code(code)
    }
}

// Encoded as the single wire code byte
impl bincode::Encode for NetworkType {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> std::result::Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.code(), encoder)
    }
}

impl<Context> bincode::Decode<Context> for NetworkType {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> std::result::Result<Self, bincode::error::DecodeError> {
        let code = <u8 as bincode::Decode<Context>>::decode(decoder)?;
        NetworkType::from_code(u64::from(code))
            .map_err(|_| bincode::error::DecodeError::Other("unknown network type"))
    }
}

bincode::impl_borrow_decode!(NetworkType);

/// Accepts either a name (`test_net`, `testnet`, `TEST_NET`) or a numeric code
impl FromStr for NetworkType {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(code) = s.trim().parse::<u64>() {
            return NetworkType::from_code(code);
        }
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "main_net" | "mainnet" => Ok(NetworkType::MainNet),
            "test_net" | "testnet" => Ok(NetworkType::TestNet),
            "mijin" => Ok(NetworkType::Mijin),
            "mijin_test" | "mijintest" => Ok(NetworkType::MijinTest),
            _ => Err(QrError::InvalidNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
