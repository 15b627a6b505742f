use crate::error::{FeeMarketError, Result};
use serde::{Deserialize, Serialize};

/// Serialize a record using bincode 2.0 with standard configuration.
///
/// The standard configuration is deterministic: identical logical values
/// always produce identical bytes, which replicated state requires.
pub fn serialize<T: Serialize + bincode::Encode>(data: &T) -> Result<Vec<u8>> {
    let config = bincode::config::standard();
    bincode::encode_to_vec(data, config)
        .map_err(|e| FeeMarketError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize a record using bincode 2.0 with standard configuration.
///
/// The record must occupy the whole buffer; trailing bytes mean the
/// input is not a canonical encoding and are rejected.
pub fn deserialize<T>(bytes: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de> + bincode::Decode<()>,
{
    let config = bincode::config::standard();
    let (data, read) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| FeeMarketError::MalformedRecord(format!("Deserialization failed: {e}")))?;
    if read != bytes.len() {
        return Err(FeeMarketError::MalformedRecord(format!(
            "{} trailing bytes after record",
            bytes.len() - read
        )));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
    struct TestRecord {
        id: u64,
        name: String,
        values: Vec<u64>,
    }

    #[test]
    fn test_serialize_deserialize() {
        let original = TestRecord {
            id: 42,
            name: "test".to_string(),
            values: vec![1, 2, 3, 4, 5],
        };

        let serialized = serialize(&original).expect("Serialization should work");
        let deserialized: TestRecord =
            deserialize(&serialized).expect("Deserialization should work");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_deserialize_trailing_bytes_fails() {
        let original = TestRecord {
            id: 1,
            name: "test".to_string(),
            values: vec![],
        };
        let mut bytes = serialize(&original).unwrap();
        bytes.push(0xAB);
        let result: Result<TestRecord> = deserialize(&bytes);
        assert!(matches!(result, Err(FeeMarketError::MalformedRecord(_))));
    }

    #[test]
    fn test_deserialize_invalid_data() {
        let invalid_bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<TestRecord> = deserialize(&invalid_bytes);
        assert!(matches!(result, Err(FeeMarketError::MalformedRecord(_))));
    }
}
