//! NIP-7 JSON envelope
//!
//! Every QR code carries `{"type", "network_id", "chain_id", "data"}`. This
//! module writes that shape and reads it back into a [`QrCode`], dispatching
//! on `type`. It performs no I/O and no logging.

use crate::core::{
    Account, AccountQr, ChainId, ContactQr, NetworkType, ObjectQr, QrCode, QrCodeType,
    TransactionMapping, TransactionQr,
};
use crate::error::{QrError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

pub const TYPE_FIELD: &str = "type";
pub const NETWORK_ID_FIELD: &str = "network_id";
pub const CHAIN_ID_FIELD: &str = "chain_id";
pub const DATA_FIELD: &str = "data";

/// Borrowed view of an envelope used when writing one out. Field order here
/// is the order on the wire.
#[derive(Debug, Serialize)]
pub(crate) struct EnvelopeRef<'a, D: Serialize> {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub network_id: NetworkType,
    pub chain_id: &'a ChainId,
    pub data: D,
}

#[derive(Debug, Serialize)]
pub(crate) struct AccountData<'a> {
    pub account: &'a Account,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransactionData {
    pub payload: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ObjectData<'a> {
    pub object: &'a Value,
}

/// An envelope whose header has been validated but whose `data` has not yet
/// been interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub kind: QrCodeType,
    pub network_type: NetworkType,
    pub chain_id: ChainId,
    pub data: Value,
}

impl Envelope {
    /// Parse envelope text. Checks run in order: empty input, JSON syntax,
    /// object shape, `type` code, then the optional header fields.
    pub fn parse(text: &str) -> Result<Envelope> {
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }

        let value: Value =
            serde_json::from_str(text).map_err(|e| QrError::MalformedJson(e.to_string()))?;
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(QrError::InvalidEnvelope(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        // any number that is not one of the codes is an unknown type,
        // including floats and values outside i64
        let kind = match object.get(TYPE_FIELD) {
            None => return Err(QrError::InvalidEnvelope("missing \"type\"".to_string())),
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(QrCodeType::from_code)
                .ok_or_else(|| QrError::UnknownType(n.to_string()))?,
            Some(_) => {
                return Err(QrError::InvalidEnvelope(
                    "\"type\" must be a number".to_string(),
                ))
            }
        };

        let network_type = match object.get(NETWORK_ID_FIELD) {
            None | Some(Value::Null) => NetworkType::default(),
            Some(Value::Number(n)) => {
                let code = n
                    .as_u64()
                    .ok_or_else(|| QrError::InvalidNetwork(n.to_string()))?;
                NetworkType::from_code(code)?
            }
            Some(other) => return Err(QrError::InvalidNetwork(other.to_string())),
        };

        let chain_id = match object.get(CHAIN_ID_FIELD) {
            None | Some(Value::Null) => ChainId::default(),
            Some(Value::String(id)) => ChainId::new(id)?,
            Some(other) => return Err(QrError::InvalidChainId(other.to_string())),
        };

        // I keep `data` raw here; only the dispatch knows which shape to expect
        let data = object.remove(DATA_FIELD).unwrap_or(Value::Null);

        Ok(Envelope {
            kind,
            network_type,
            chain_id,
            data,
        })
    }

    fn data_object(&self) -> Result<&Map<String, Value>> {
        self.data.as_object().ok_or_else(|| {
            QrError::InvalidEnvelope(format!("\"data\" must be an object for {}", self.kind))
        })
    }

    fn data_field(&self, name: &str) -> Result<&Value> {
        self.data_object()?.get(name).ok_or_else(|| {
            QrError::InvalidEnvelope(format!("missing \"data.{name}\" for {}", self.kind))
        })
    }

    fn data_string(&self, name: &str) -> Result<&str> {
        self.data_field(name)?.as_str().ok_or_else(|| {
            QrError::InvalidEnvelope(format!("\"data.{name}\" must be a string"))
        })
    }

    /// Build the payload variant this envelope describes
    pub fn into_qr_code<M: TransactionMapping + ?Sized>(self, mapping: &M) -> Result<QrCode> {
        let network = Some(self.network_type);
        let chain_id = Some(self.chain_id.clone());

        match self.kind {
            QrCodeType::AddContact => {
                let account = Account::new(self.data_string("account")?);
                Ok(ContactQr::new(account, network, chain_id).into())
            }
            QrCodeType::ExportAccount => {
                let account = Account::new(self.data_string("account")?);
                Ok(AccountQr::new(account, network, chain_id).into())
            }
            QrCodeType::RequestTransaction => {
                let transaction = mapping.from_payload(self.data_string("payload")?)?;
                Ok(TransactionQr::new(transaction, network, chain_id).into())
            }
            // I have not built cosignature requests yet, so I say so instead of guessing
            QrCodeType::RequestCosignature => Err(QrError::NotImplemented(self.kind)),
            QrCodeType::ExportObject => {
                let object = self.data_field("object")?.clone();
                Ok(ObjectQr::new(object, network, chain_id).into())
            }
        }
    }
}

/// Decode envelope text into a payload variant
pub fn decode<M: TransactionMapping + ?Sized>(text: &str, mapping: &M) -> Result<QrCode> {
    Envelope::parse(text)?.into_qr_code(mapping)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HexTransactionMapping, DEFAULT_CHAIN_ID};

    #[test]
    fn test_parse_applies_defaults() {
        let envelope = Envelope::parse(r#"{"type": 2, "data": {"account": "alice"}}"#).unwrap();
        assert_eq!(envelope.kind, QrCodeType::ExportAccount);
        assert_eq!(envelope.network_type, NetworkType::TestNet);
        assert_eq!(envelope.chain_id.as_str(), DEFAULT_CHAIN_ID);
    }

    #[test]
    fn test_parse_reads_header() {
        let lower = DEFAULT_CHAIN_ID.to_lowercase();
        let text = format!(r#"{{"type": 5, "network_id": 104, "chain_id": "{lower}", "data": {{}}}}"#);
        let envelope = Envelope::parse(&text).unwrap();
        assert_eq!(envelope.network_type, NetworkType::MainNet);
        assert_eq!(envelope.chain_id.as_str(), lower);
    }

    #[test]
    fn test_parse_error_order() {
        assert_eq!(Envelope::parse(""), Err(QrError::EmptyInput));
        assert!(matches!(
            Envelope::parse("{not json"),
            Err(QrError::MalformedJson(_))
        ));
        assert!(matches!(
            Envelope::parse("[1, 2]"),
            Err(QrError::InvalidEnvelope(_))
        ));
        assert!(matches!(
            Envelope::parse(r#"{"data": {}}"#),
            Err(QrError::InvalidEnvelope(_))
        ));
        assert!(matches!(
            Envelope::parse(r#"{"type": "2"}"#),
            Err(QrError::InvalidEnvelope(_))
        ));
        // type is checked before anything else in the header
        assert_eq!(
            Envelope::parse(r#"{"type": 9999, "network_id": 1, "chain_id": "x"}"#),
            Err(QrError::UnknownType("9999".to_string()))
        );
    }

    #[test]
    fn test_non_integer_numeric_type_is_unknown() {
        for (text, code) in [
            (r#"{"type": 18446744073709551615}"#, "18446744073709551615"),
            (r#"{"type": 3.0}"#, "3.0"),
            (r#"{"type": -1}"#, "-1"),
        ] {
            assert_eq!(
                Envelope::parse(text),
                Err(QrError::UnknownType(code.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_header_values() {
        assert!(matches!(
            Envelope::parse(r#"{"type": 1, "network_id": 7}"#),
            Err(QrError::InvalidNetwork(_))
        ));
        assert!(matches!(
            Envelope::parse(r#"{"type": 1, "network_id": "152"}"#),
            Err(QrError::InvalidNetwork(_))
        ));
        assert!(matches!(
            Envelope::parse(r#"{"type": 1, "chain_id": "E2A9"}"#),
            Err(QrError::InvalidChainId(_))
        ));
        assert!(matches!(
            Envelope::parse(r#"{"type": 1, "chain_id": 12}"#),
            Err(QrError::InvalidChainId(_))
        ));
    }

    #[test]
    fn test_missing_data_fields() {
        let mapping = HexTransactionMapping;
        for text in [
            r#"{"type": 1}"#,
            r#"{"type": 1, "data": []}"#,
            r#"{"type": 2, "data": {"account": 5}}"#,
            r#"{"type": 3, "data": {}}"#,
            r#"{"type": 5, "data": {"obj": {}}}"#,
        ] {
            let result = decode(text, &mapping);
            assert!(
                matches!(result, Err(QrError::InvalidEnvelope(_))),
                "{text} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_cosignature_not_implemented() {
        let result = decode(r#"{"type": 4, "data": {}}"#, &HexTransactionMapping);
        assert_eq!(
            result,
            Err(QrError::NotImplemented(QrCodeType::RequestCosignature))
        );
    }

    #[test]
    fn test_envelope_ref_field_order() {
        let chain_id = ChainId::default();
        let envelope = EnvelopeRef {
            kind: QrCodeType::AddContact,
            network_id: NetworkType::TestNet,
            chain_id: &chain_id,
            data: AccountData {
                account: &Account::new("bob"),
            },
        };
        let text = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            text,
            format!(
                r#"{{"type":1,"network_id":152,"chain_id":"{DEFAULT_CHAIN_ID}","data":{{"account":"bob"}}}}"#
            )
        );
    }
}
