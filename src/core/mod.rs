//! Core QR payload functionality
//!
//! Domain values (networks, chain ids, accounts, transactions), the payload
//! variants built from them, the NIP-7 envelope codec and the factory.

pub mod account;
pub mod chain_id;
pub mod envelope;
pub mod generator;
pub mod mapping;
pub mod network;
pub mod qr_code;
pub mod qr_type;
pub mod render;
pub mod transaction;

pub use account::{hash_pub_key, Account, ADDRESS_CHECK_SUM_LEN};
pub use chain_id::{ChainId, CHAIN_ID_HEX_LEN, DEFAULT_CHAIN_ID};
pub use envelope::Envelope;
pub use generator::QrCodeGenerator;
pub use mapping::{HexTransactionMapping, TransactionMapping};
pub use network::NetworkType;
pub use qr_code::{AccountQr, ContactQr, ObjectQr, QrCode, TransactionQr};
pub use qr_type::QrCodeType;
pub use render::QrRenderer;
pub use transaction::{Transaction, MAX_MESSAGE_LEN};
