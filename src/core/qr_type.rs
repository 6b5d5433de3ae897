// QR code kinds and their stable wire codes
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a QR code carries. The discriminant is the `type`
/// code written into every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum QrCodeType {
    AddContact = 1,
    ExportAccount = 2,
    RequestTransaction = 3,
    RequestCosignature = 4,
    ExportObject = 5,
}

impl QrCodeType {
    pub const ALL: [QrCodeType; 5] = [
        QrCodeType::AddContact,
        QrCodeType::ExportAccount,
        QrCodeType::RequestTransaction,
        QrCodeType::RequestCosignature,
        QrCodeType::ExportObject,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its wire code
    pub fn from_code(code: i64) -> Option<QrCodeType> {
        Self::ALL.into_iter().find(|kind| i64::from(kind.code()) == code)
    }
}

impl From<QrCodeType> for u8 {
    fn from(kind: QrCodeType) -> u8 {
        kind.code()
    }
}

impl TryFrom<i64> for QrCodeType {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        QrCodeType::from_code(code).ok_or_else(|| format!("Unknown QR code type: {code}"))
    }
}

impl fmt::Display for QrCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QrCodeType::AddContact => "AddContact",
            QrCodeType::ExportAccount => "ExportAccount",
            QrCodeType::RequestTransaction => "RequestTransaction",
            QrCodeType::RequestCosignature => "RequestCosignature",
            QrCodeType::ExportObject => "ExportObject",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(QrCodeType::AddContact.code(), 1);
        assert_eq!(QrCodeType::ExportAccount.code(), 2);
        assert_eq!(QrCodeType::RequestTransaction.code(), 3);
        assert_eq!(QrCodeType::RequestCosignature.code(), 4);
        assert_eq!(QrCodeType::ExportObject.code(), 5);
    }

    #[test]
    fn test_from_code() {
        for kind in QrCodeType::ALL {
            assert_eq!(QrCodeType::from_code(i64::from(kind.code())), Some(kind));
        }
        assert_eq!(QrCodeType::from_code(0), None);
        assert_eq!(QrCodeType::from_code(9999), None);
        assert_eq!(QrCodeType::from_code(-1), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&QrCodeType::ExportObject).unwrap();
        assert_eq!(json, "5");
        let kind: QrCodeType = serde_json::from_str("3").unwrap();
        assert_eq!(kind, QrCodeType::RequestTransaction);
        assert!(serde_json::from_str::<QrCodeType>("42").is_err());
    }
}
