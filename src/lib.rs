//! # nip7-qr
//!
//! Builds and reads the JSON payloads carried inside NIP-7 QR codes.
//!
//! Every QR code holds an envelope `{"type", "network_id", "chain_id", "data"}`.
//! [`QrCodeGenerator`] creates the payload variants (contacts, account
//! exports, transaction requests, arbitrary JSON objects) and turns scanned
//! text back into a [`QrCode`].
//!
//! ## Layout
//! - `core/`: domain values, payload variants, envelope codec and factory
//! - `error/`: the [`QrError`] taxonomy
//! - `utils/`: hashing, base58, hex and bincode helpers
//! - `config/`: defaults for the command line tool
//! - `cli/`: argument parsing for the `nip7-qr` binary
//!
//! Transaction bytes and QR images are produced by collaborators: see
//! [`TransactionMapping`] and [`QrRenderer`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, Settings, GLOBAL_CONFIG};
pub use core::{
    Account, AccountQr, ChainId, ContactQr, Envelope, HexTransactionMapping, NetworkType,
    ObjectQr, QrCode, QrCodeGenerator, QrCodeType, QrRenderer, Transaction, TransactionMapping,
    TransactionQr, DEFAULT_CHAIN_ID,
};
pub use error::{QrError, Result};
