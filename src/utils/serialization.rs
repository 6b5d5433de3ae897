// Bincode and hex helpers for transaction payload bytes
use crate::error::{QrError, Result};
use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};

/// Upper bound on bytes bincode may claim while decoding untrusted input.
/// Length prefixes larger than this fail before anything is allocated.
pub const MAX_DECODE_BYTES: usize = 64 * 1024;

/// Serialize data using bincode 2.0 with standard configuration
pub fn serialize<T: bincode::Encode>(data: &T) -> Result<Vec<u8>> {
    let config = bincode::config::standard();
    bincode::encode_to_vec(data, config)
        .map_err(|e| QrError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data using bincode 2.0 with standard configuration.
///
/// The whole slice must be consumed; trailing bytes are an error. Decoding
/// is capped at [`MAX_DECODE_BYTES`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T>
where
    T: bincode::Decode<()>,
{
    let config = bincode::config::standard().with_limit::<MAX_DECODE_BYTES>();
    let (data, read) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| QrError::Serialization(format!("Deserialization failed: {e}")))?;
    if read != bytes.len() {
        return Err(QrError::Serialization(format!(
            "Deserialization left {} trailing bytes",
            bytes.len() - read
        )));
    }
    Ok(data)
}

/// Uppercase hex, the form payloads travel in
pub fn hex_encode(bytes: &[u8]) -> String {
    HEXUPPER.encode(bytes)
}

/// Accepts either hex case
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    HEXUPPER_PERMISSIVE
        .decode(text.as_bytes())
        .map_err(|e| QrError::Serialization(format!("Invalid hex encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
    struct TestData {
        id: u64,
        name: String,
        values: Vec<i32>,
    }

    #[test]
    fn test_serialize_deserialize() {
        let original = TestData {
            id: 42,
            name: "test".to_string(),
            values: vec![1, 2, 3, 4, 5],
        };

        let serialized = serialize(&original).expect("Serialization should work");
        let deserialized: TestData = deserialize(&serialized).expect("Deserialization should work");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_deserialize_invalid_data() {
        let invalid_bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<TestData> = deserialize(&invalid_bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_trailing_bytes() {
        let mut bytes = serialize(&7u64).unwrap();
        bytes.push(0x00);
        let result: Result<u64> = deserialize(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_length_prefix_is_an_error() {
        // varint 0xFD marker followed by a u64 length of 2^40
        let bytes = [0xFD, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00];
        let result: Result<Vec<u8>> = deserialize(&bytes);
        assert!(matches!(result, Err(QrError::Serialization(_))));

        let bytes = [0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        let result: Result<String> = deserialize(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_hex_case_handling() {
        assert_eq!(hex_encode(&[0xab, 0x01]), "AB01");
        assert_eq!(hex_decode("ab01").unwrap(), vec![0xab, 0x01]);
        assert_eq!(hex_decode("AB01").unwrap(), vec![0xab, 0x01]);
        assert!(hex_decode("ABC").is_err());
        assert!(hex_decode("zz").is_err());
    }
}
