// QR payload variants and the closed sum type over them.
// All variants are immutable once built; equality is by value.

use crate::core::envelope::{AccountData, EnvelopeRef, ObjectData, TransactionData};
use crate::core::{
    Account, ChainId, NetworkType, QrCodeType, QrRenderer, Transaction, TransactionMapping,
};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

fn to_value<D: Serialize>(envelope: &EnvelopeRef<'_, D>) -> Result<Value> {
    Ok(serde_json::to_value(envelope)?)
}

fn to_text<D: Serialize>(envelope: &EnvelopeRef<'_, D>) -> Result<String> {
    Ok(serde_json::to_string(envelope)?)
}

/// Add-contact QR: someone else's account to save in an address book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQr {
    account: Account,
    network_type: NetworkType,
    chain_id: ChainId,
}

impl ContactQr {
    pub fn new(
        account: Account,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> ContactQr {
        ContactQr {
            account,
            network_type: network_type.unwrap_or_default(),
            chain_id: chain_id.unwrap_or_default(),
        }
    }

    pub fn get_account(&self) -> &Account {
        &self.account
    }

    pub fn get_network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn get_chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn envelope(&self) -> EnvelopeRef<'_, AccountData<'_>> {
        EnvelopeRef {
            kind: QrCodeType::AddContact,
            network_id: self.network_type,
            chain_id: &self.chain_id,
            data: AccountData {
                account: &self.account,
            },
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        to_value(&self.envelope())
    }

    pub fn to_json_string(&self) -> Result<String> {
        to_text(&self.envelope())
    }
}

/// Export-account QR: the holder's own account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQr {
    account: Account,
    network_type: NetworkType,
    chain_id: ChainId,
}

impl AccountQr {
    pub fn new(
        account: Account,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> AccountQr {
        AccountQr {
            account,
            network_type: network_type.unwrap_or_default(),
            chain_id: chain_id.unwrap_or_default(),
        }
    }

    pub fn get_account(&self) -> &Account {
        &self.account
    }

    pub fn get_network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn get_chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn envelope(&self) -> EnvelopeRef<'_, AccountData<'_>> {
        EnvelopeRef {
            kind: QrCodeType::ExportAccount,
            network_id: self.network_type,
            chain_id: &self.chain_id,
            data: AccountData {
                account: &self.account,
            },
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        to_value(&self.envelope())
    }

    pub fn to_json_string(&self) -> Result<String> {
        to_text(&self.envelope())
    }
}

/// Transaction request QR. The payload travels as the mapping's hex
/// encoding; in memory it is the reconstructed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQr {
    transaction: Transaction,
    network_type: NetworkType,
    chain_id: ChainId,
}

impl TransactionQr {
    pub fn new(
        transaction: Transaction,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> TransactionQr {
        TransactionQr {
            transaction,
            network_type: network_type.unwrap_or_default(),
            chain_id: chain_id.unwrap_or_default(),
        }
    }

    pub fn get_transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn get_network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn get_chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn envelope<M: TransactionMapping + ?Sized>(
        &self,
        mapping: &M,
    ) -> Result<EnvelopeRef<'_, TransactionData>> {
        Ok(EnvelopeRef {
            kind: QrCodeType::RequestTransaction,
            network_id: self.network_type,
            chain_id: &self.chain_id,
            data: TransactionData {
                payload: mapping.to_payload(&self.transaction)?,
            },
        })
    }

    pub fn to_json<M: TransactionMapping + ?Sized>(&self, mapping: &M) -> Result<Value> {
        to_value(&self.envelope(mapping)?)
    }

    pub fn to_json_string<M: TransactionMapping + ?Sized>(&self, mapping: &M) -> Result<String> {
        to_text(&self.envelope(mapping)?)
    }
}

/// Export-object QR: any JSON value, carried verbatim and never inspected
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQr {
    object: Value,
    network_type: NetworkType,
    chain_id: ChainId,
}

impl ObjectQr {
    pub fn new(
        object: Value,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> ObjectQr {
        ObjectQr {
            object,
            network_type: network_type.unwrap_or_default(),
            chain_id: chain_id.unwrap_or_default(),
        }
    }

    /// Build from any serializable value
    pub fn from_serializable<T: Serialize>(
        object: &T,
        network_type: Option<NetworkType>,
        chain_id: Option<ChainId>,
    ) -> Result<ObjectQr> {
        Ok(ObjectQr::new(
            serde_json::to_value(object)?,
            network_type,
            chain_id,
        ))
    }

    pub fn get_object(&self) -> &Value {
        &self.object
    }

    pub fn get_network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn get_chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn envelope(&self) -> EnvelopeRef<'_, ObjectData<'_>> {
        EnvelopeRef {
            kind: QrCodeType::ExportObject,
            network_id: self.network_type,
            chain_id: &self.chain_id,
            data: ObjectData {
                object: &self.object,
            },
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        to_value(&self.envelope())
    }

    pub fn to_json_string(&self) -> Result<String> {
        to_text(&self.envelope())
    }
}

/// Any QR payload the library can build or read back.
///
/// `RequestCosignature` has a wire code but no variant: decoding it fails
/// with [`crate::QrError::NotImplemented`].
#[derive(Debug, Clone, PartialEq)]
pub enum QrCode {
    AddContact(ContactQr),
    ExportAccount(AccountQr),
    RequestTransaction(TransactionQr),
    ExportObject(ObjectQr),
}

impl QrCode {
    pub fn kind(&self) -> QrCodeType {
        match self {
            QrCode::AddContact(_) => QrCodeType::AddContact,
            QrCode::ExportAccount(_) => QrCodeType::ExportAccount,
            QrCode::RequestTransaction(_) => QrCodeType::RequestTransaction,
            QrCode::ExportObject(_) => QrCodeType::ExportObject,
        }
    }

    pub fn network_type(&self) -> NetworkType {
        match self {
            QrCode::AddContact(qr) => qr.get_network_type(),
            QrCode::ExportAccount(qr) => qr.get_network_type(),
            QrCode::RequestTransaction(qr) => qr.get_network_type(),
            QrCode::ExportObject(qr) => qr.get_network_type(),
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        match self {
            QrCode::AddContact(qr) => qr.get_chain_id(),
            QrCode::ExportAccount(qr) => qr.get_chain_id(),
            QrCode::RequestTransaction(qr) => qr.get_chain_id(),
            QrCode::ExportObject(qr) => qr.get_chain_id(),
        }
    }

    /// Envelope as a JSON value. `mapping` is only consulted for
    /// transaction requests.
    pub fn to_json<M: TransactionMapping + ?Sized>(&self, mapping: &M) -> Result<Value> {
        match self {
            QrCode::AddContact(qr) => qr.to_json(),
            QrCode::ExportAccount(qr) => qr.to_json(),
            QrCode::RequestTransaction(qr) => qr.to_json(mapping),
            QrCode::ExportObject(qr) => qr.to_json(),
        }
    }

    /// Envelope text, ready to hand to a QR renderer
    pub fn to_json_string<M: TransactionMapping + ?Sized>(&self, mapping: &M) -> Result<String> {
        match self {
            QrCode::AddContact(qr) => qr.to_json_string(),
            QrCode::ExportAccount(qr) => qr.to_json_string(),
            QrCode::RequestTransaction(qr) => qr.to_json_string(mapping),
            QrCode::ExportObject(qr) => qr.to_json_string(),
        }
    }

    pub fn render_with<M, R>(&self, mapping: &M, renderer: &R) -> Result<R::Output>
    where
        M: TransactionMapping + ?Sized,
        R: QrRenderer + ?Sized,
    {
        renderer.render(&self.to_json_string(mapping)?)
    }
}

impl From<ContactQr> for QrCode {
    fn from(qr: ContactQr) -> Self {
        QrCode::AddContact(qr)
    }
}

impl From<AccountQr> for QrCode {
    fn from(qr: AccountQr) -> Self {
        QrCode::ExportAccount(qr)
    }
}

impl From<TransactionQr> for QrCode {
    fn from(qr: TransactionQr) -> Self {
        QrCode::RequestTransaction(qr)
    }
}

impl From<ObjectQr> for QrCode {
    fn from(qr: ObjectQr) -> Self {
        QrCode::ExportObject(qr)
    }
}
