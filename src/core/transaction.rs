// This file holds the transfer transaction I carry inside transaction request QR codes
// The id is the SHA-256 of the bincode encoding with the id field cleared

use crate::core::{Account, NetworkType};
use crate::error::{QrError, Result};
use crate::utils::{deserialize, serialize, sha256_digest};
use serde::{Deserialize, Serialize};

// I cap messages so a transaction always fits comfortably in one QR code
pub const MAX_MESSAGE_LEN: usize = 1024;

// This is a request to move `amount` to `recipient` on a given network
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Transaction {
    id: Vec<u8>,               // Hash of everything below, filled in by new_transfer
    network_type: NetworkType, // The network this transfer is meant for
    recipient: Account,        // Who receives the funds
    amount: u64,               // How much to send, in micro units
    fee: u64,                  // The most I am willing to pay the network
    deadline: u64,             // Unix seconds after which the request expires
    message: String,           // Plain text note attached to the transfer
}

impl Transaction {
    pub fn new_transfer(
        network_type: NetworkType,
        recipient: Account,
        amount: u64,
        fee: u64,
        deadline: u64,
        message: &str,
    ) -> Result<Transaction> {
        // I refuse empty transfers, they would only waste a QR code
        if amount == 0 {
            return Err(QrError::Transaction("Amount must be positive".to_string()));
        }

        if message.len() > MAX_MESSAGE_LEN {
            return Err(QrError::Transaction(format!(
                "Message is {} bytes, limit is {MAX_MESSAGE_LEN}",
                message.len()
            )));
        }

        let mut tx = Transaction {
            id: vec![],
            network_type,
            recipient,
            amount,
            fee,
            deadline,
            message: message.to_string(),
        };
        // I calculate the transaction ID by hashing its contents
        tx.id = tx.hash()?;
        Ok(tx)
    }

    // I hash a copy with an empty id so the id never depends on itself
    fn hash(&self) -> Result<Vec<u8>> {
        let tx_copy = Transaction {
            id: vec![],
            ..self.clone()
        };
        Ok(sha256_digest(&tx_copy.serialize()?))
    }

    // When I read a transaction back from a QR code I use this to check nobody edited it
    pub fn verify_id(&self) -> bool {
        match self.hash() {
            Ok(hash) => hash == self.id,
            Err(_) => false,
        }
    }

    pub fn get_id(&self) -> &[u8] {
        self.id.as_slice()
    }

    pub fn get_network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn get_recipient(&self) -> &Account {
        &self.recipient
    }

    pub fn get_amount(&self) -> u64 {
        self.amount
    }

    pub fn get_fee(&self) -> u64 {
        self.fee
    }

    pub fn get_deadline(&self) -> u64 {
        self.deadline
    }

    pub fn get_message(&self) -> &str {
        self.message.as_str()
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Transaction> {
        deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new_transfer(
            NetworkType::TestNet,
            Account::new("TAHNZXQBC57AA7KJTMGS3PJPZBXN7DV5JHJU42AI"),
            1_000_000,
            20_000,
            1_700_000_000,
            "coffee",
        )
        .unwrap()
    }

    #[test]
    fn test_new_transfer_sets_id() {
        let tx = sample();
        assert_eq!(tx.get_id().len(), 32);
        assert!(tx.verify_id());
        assert_eq!(tx.get_amount(), 1_000_000);
        assert_eq!(tx.get_message(), "coffee");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = Transaction::new_transfer(
            NetworkType::TestNet,
            Account::new("alice"),
            0,
            0,
            0,
            "",
        );
        assert!(matches!(result, Err(QrError::Transaction(_))));
    }

    #[test]
    fn test_oversized_message_rejected() {
        let message = "x".repeat(MAX_MESSAGE_LEN + 1);
        let result = Transaction::new_transfer(
            NetworkType::TestNet,
            Account::new("alice"),
            1,
            0,
            0,
            &message,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_id_depends_on_contents() {
        let a = sample();
        let b = Transaction::new_transfer(
            NetworkType::TestNet,
            Account::new("TAHNZXQBC57AA7KJTMGS3PJPZBXN7DV5JHJU42AI"),
            1_000_001,
            20_000,
            1_700_000_000,
            "coffee",
        )
        .unwrap();
        assert_ne!(a.get_id(), b.get_id());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_id() {
        let tx = sample();
        let bytes = tx.serialize().unwrap();
        let restored = Transaction::deserialize(&bytes).unwrap();
        assert_eq!(tx, restored);
        assert!(restored.verify_id());
    }
}
