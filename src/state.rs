//! Application state handed to and persisted for the embedded app
//!
//! The shim treats the state as opaque payload: it only encodes and decodes
//! it. Fields beyond the two named ones are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ShimError;

/// State owned by the embedded app
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// API token of the signed-in user (empty when signed out)
    #[serde(default)]
    pub api_token: String,
    /// Signed-in username (empty when signed out)
    #[serde(default)]
    pub username: String,
    /// Any other fields the app keeps in its state; never holds the named keys
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Keys owned by the typed fields
const NAMED_KEYS: [&str; 2] = ["apiToken", "username"];

impl AppState {
    pub fn new(api_token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            username: username.into(),
            extra: Map::new(),
        }
    }

    /// Encode to the JSON text stored in LocalStorage
    pub fn encode(&self) -> Result<String, ShimError> {
        serde_json::to_string(self).map_err(ShimError::Encode)
    }

    /// Decode and validate stored JSON text
    ///
    /// Missing `apiToken`/`username` decode as empty strings. A non-object
    /// value or a wrong-typed named field is rejected.
    pub fn decode(text: &str) -> Result<Self, ShimError> {
        serde_json::from_str(text).map_err(ShimError::Decode)
    }

    /// Fields other than `apiToken` and `username`
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Set an extra field, returning the previous value
    ///
    /// The named keys belong to the typed fields; setting them here is
    /// refused with `Err` so the encoding never carries a duplicate key.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>, Value> {
        let key = key.into();
        if NAMED_KEYS.contains(&key.as_str()) {
            return Err(value);
        }
        Ok(self.extra.insert(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_has_empty_fields() {
        let state = AppState::default();
        assert_eq!(state.encode().unwrap(), r#"{"apiToken":"","username":""}"#);
    }

    #[test]
    fn test_decode_exact_structure() {
        let state = AppState::decode(r#"{"apiToken":"abc","username":"bob"}"#).unwrap();
        assert_eq!(state, AppState::new("abc", "bob"));
    }

    #[test]
    fn test_decode_missing_fields_are_empty() {
        let state = AppState::decode(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(state, AppState::new("", "bob"));
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        assert!(AppState::decode("").is_err());
        assert!(AppState::decode("null").is_err());
        assert!(AppState::decode("[1,2]").is_err());
        assert!(AppState::decode(r#"{"apiToken":5,"username":"bob"}"#).is_err());
        assert!(AppState::decode("{\"apiToken\":").is_err());
    }

    #[test]
    fn test_named_keys_refused_as_extra() {
        let mut state = AppState::new("a", "b");
        assert_eq!(
            state.insert_extra("apiToken", Value::from("shadow")),
            Err(Value::from("shadow"))
        );
        assert!(state.insert_extra("username", Value::Null).is_err());
        assert!(state.extra().is_empty());

        let decoded = AppState::decode(&state.encode().unwrap()).unwrap();
        assert_eq!(decoded, AppState::new("a", "b"));
    }

    #[test]
    fn test_unknown_fields_survive() {
        let text = r#"{"apiToken":"t","username":"u","theme":{"dark":true},"visits":3}"#;
        let state = AppState::decode(text).unwrap();
        assert_eq!(state.extra().get("visits"), Some(&Value::from(3)));

        let again = AppState::decode(&state.encode().unwrap()).unwrap();
        assert_eq!(again, state);
    }

    fn extra_key() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("apiToken".to_string()),
            Just("username".to_string()),
            "[a-zA-Z_]{1,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_encode_decode_roundtrip(
            token in ".*",
            user in ".*",
            extras in proptest::collection::vec((extra_key(), ".*"), 0..6),
        ) {
            let mut state = AppState::new(token, user);
            for (key, value) in extras {
                let _ = state.insert_extra(key, Value::String(value));
            }
            let decoded = AppState::decode(&state.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, state);
        }
    }
}
