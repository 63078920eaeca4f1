//
//  vela-sdk
//  types/log.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Log resource.
//!
//! Logs hold the raw output of one step or one service. The server encodes
//! `data` as standard base64 in JSON.

use serde::{Deserialize, Serialize};

/// Output captured from a step or service container.
///
/// # Example
///
/// ```rust
/// use vela_sdk::types::Log;
///
/// let log: Log = serde_json::from_str(r#"{"id": 1, "step_id": 2, "data": "aGVsbG8="}"#).unwrap();
/// assert_eq!(log.data.as_deref(), Some(&b"hello"[..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Set for service logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,

    /// Set for step logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_id: Option<i64>,

    /// Raw log bytes.
    #[serde(skip_serializing_if = "Option::is_none", default, with = "base64_bytes")]
    pub data: Option<Vec<u8>>,
}

/// Serde adapter for `Option<Vec<u8>>` transported as standard base64.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match data {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_data_is_base64() {
        let log = Log {
            step_id: Some(1),
            data: Some(b"$ make test\nok\n".to_vec()),
            ..Default::default()
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["data"], "JCBtYWtlIHRlc3QKb2sK");
        assert!(json.get("service_id").is_none());
    }

    #[test]
    fn test_log_missing_and_null_data() {
        let log: Log = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(log.data.is_none());

        let log: Log = serde_json::from_str(r#"{"id": 1, "data": null}"#).unwrap();
        assert!(log.data.is_none());
    }

    #[test]
    fn test_log_rejects_invalid_base64() {
        let result = serde_json::from_str::<Log>(r#"{"data": "not base64!"}"#);
        assert!(result.is_err());
    }
}
