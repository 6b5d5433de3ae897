//! Error handling for QR payload encoding and decoding
//!
//! Every failure the library can surface is a variant of [`QrError`].

use crate::core::QrCodeType;
use std::fmt;

/// Result type alias for QR payload operations
pub type Result<T> = std::result::Result<T, QrError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Decode input was missing or empty
    EmptyInput,
    /// Decode input is not syntactically valid JSON
    MalformedJson(String),
    /// `type` field holds a number that is not a known QR code type
    UnknownType(String),
    /// `type` is recognized but has no implementation
    NotImplemented(QrCodeType),
    /// The transaction mapping could not interpret `data.payload`
    TransactionDecode(String),
    /// Envelope is valid JSON but not the expected shape
    InvalidEnvelope(String),
    /// Chain id is not a 64 character hex string
    InvalidChainId(String),
    /// Network code or name is not recognized
    InvalidNetwork(String),
    /// Domain transaction construction errors
    Transaction(String),
    /// Serialization errors
    Serialization(String),
    /// QR rendering collaborator errors
    Render(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::EmptyInput => write!(f, "QR json object is missing"),
            QrError::MalformedJson(msg) => write!(f, "Malformed QR json: {msg}"),
            QrError::UnknownType(code) => write!(f, "Unknown QR code type: {code}"),
            QrError::NotImplemented(kind) => {
                write!(f, "QR code type {kind} is not implemented")
            }
            QrError::TransactionDecode(msg) => write!(f, "Transaction decode error: {msg}"),
            QrError::InvalidEnvelope(msg) => write!(f, "Invalid QR envelope: {msg}"),
            QrError::InvalidChainId(id) => write!(f, "Invalid chain id: {id}"),
            QrError::InvalidNetwork(net) => write!(f, "Invalid network: {net}"),
            QrError::Transaction(msg) => write!(f, "Transaction error: {msg}"),
            QrError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            QrError::Render(msg) => write!(f, "Render error: {msg}"),
            QrError::Config(msg) => write!(f, "Configuration error: {msg}"),
            QrError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for QrError {}

impl From<std::io::Error> for QrError {
    fn from(err: std::io::Error) -> Self {
        QrError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QrError {
    fn from(err: serde_json::Error) -> Self {
        QrError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for QrError {
    fn from(err: toml::de::Error) -> Self {
        QrError::Config(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for QrError {
    fn from(err: bincode::error::EncodeError) -> Self {
        QrError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for QrError {
    fn from(err: bincode::error::DecodeError) -> Self {
        QrError::Serialization(err.to_string())
    }
}
