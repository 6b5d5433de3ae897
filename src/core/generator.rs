//! NIP-7 QR code factory
//!
//! [`QrCodeGenerator`] holds no state. Producers call the `create_*`
//! functions to build a payload they want to emit; readers call
//! [`QrCodeGenerator::from_json`] on scanned text.

use crate::core::envelope;
use crate::core::{
    Account, AccountQr, ChainId, ContactQr, HexTransactionMapping, NetworkType, ObjectQr,
    QrCode, Transaction, TransactionMapping, TransactionQr,
};
use crate::error::{QrError, Result};
use serde_json::Value;

/// Omitted network or chain id falls back to the test network and the
/// default genesis hash.
pub struct QrCodeGenerator;

impl QrCodeGenerator {
    /// Wrap an arbitrary JSON value. Its shape is not checked.
    pub fn create_export_object(
        object: Value,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> ObjectQr {
        ObjectQr::new(object, network_type, chain_id)
    }

    /// Wrap an already built transaction. It is not re-validated.
    pub fn create_transaction_request(
        transaction: Transaction,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> TransactionQr {
        TransactionQr::new(transaction, network_type, chain_id)
    }

    pub fn create_export_account(
        account: Account,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> AccountQr {
        AccountQr::new(account, network_type, chain_id)
    }

    pub fn create_add_contact(
        account: Account,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> ContactQr {
        ContactQr::new(account, network_type, chain_id)
    }

    /// Read QR text using the default hex transaction mapping
    pub fn from_json(json: &str) -> Result<QrCode> {
        Self::from_json_with(json, &HexTransactionMapping)
    }

    /// Like [`QrCodeGenerator::from_json`], treating `None` as empty input
    pub fn from_optional_json(json: Option<&str>) -> Result<QrCode> {
        match json {
            Some(json) => Self::from_json(json),
            None => Err(QrError::EmptyInput),
        }
    }

    /// Read QR text, resolving transaction payloads through `mapping`
    pub fn from_json_with<M: TransactionMapping + ?Sized>(
        json: &str,
        mapping: &M,
    ) -> Result<QrCode> {
        envelope::decode(json, mapping)
    }
}
