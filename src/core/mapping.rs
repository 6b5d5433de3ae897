//! Transaction mapping collaborator
//!
//! Converts between a domain [`Transaction`] and the hex payload carried in
//! `data.payload` of a transaction request envelope.

use crate::core::Transaction;
use crate::error::{QrError, Result};
use crate::utils::{hex_decode, hex_encode};

pub trait TransactionMapping {
    /// Canonical hex encoding of `transaction`
    fn to_payload(&self, transaction: &Transaction) -> Result<String>;

    /// Rebuild a transaction from its hex payload. Failures are reported as
    /// [`QrError::TransactionDecode`].
    fn from_payload(&self, payload: &str) -> Result<Transaction>;
}

/// Bincode bytes written as uppercase hex. Decoding accepts either case.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexTransactionMapping;

impl TransactionMapping for HexTransactionMapping {
    fn to_payload(&self, transaction: &Transaction) -> Result<String> {
        Ok(hex_encode(&transaction.serialize()?))
    }

    fn from_payload(&self, payload: &str) -> Result<Transaction> {
        if payload.is_empty() {
            return Err(QrError::TransactionDecode("payload is empty".to_string()));
        }
        let bytes = hex_decode(payload).map_err(|e| QrError::TransactionDecode(e.to_string()))?;
        Transaction::deserialize(&bytes).map_err(|e| QrError::TransactionDecode(e.to_string()))
    }
}

impl<M: TransactionMapping + ?Sized> TransactionMapping for &M {
    fn to_payload(&self, transaction: &Transaction) -> Result<String> {
        (**self).to_payload(transaction)
    }

    fn from_payload(&self, payload: &str) -> Result<Transaction> {
        (**self).from_payload(payload)
    }
}
