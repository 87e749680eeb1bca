//! Strict structural validation of untrusted subgraph responses.
//!
//! Response types derive `Deserialize` with `deny_unknown_fields`, and
//! nullable fields use [`required_nullable`] so that an absent key is an
//! error rather than a silent `None`. Validation is parse-then-construct:
//! once [`ResponseSchema::validate`] succeeds the value is fully typed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// The upstream reply did not have the declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Response does not match {schema}: {reason}")]
pub struct SchemaMismatch {
    /// Name of the schema that rejected the value
    pub schema: &'static str,
    /// Underlying deserialization error
    pub reason: String,
}

/// A declared upstream response shape.
pub trait ResponseSchema: DeserializeOwned {
    /// Name used in mismatch diagnostics
    const NAME: &'static str;

    fn validate(raw: serde_json::Value) -> Result<Self, SchemaMismatch> {
        serde_json::from_value(raw).map_err(|e| SchemaMismatch {
            schema: Self::NAME,
            reason: e.to_string(),
        })
    }
}

/// Deserialize an `Option<T>` that must be present, but may be `null`.
pub fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Probe {
        #[allow(dead_code)]
        name: String,
        #[serde(deserialize_with = "required_nullable")]
        expiry: Option<String>,
    }

    impl ResponseSchema for Probe {
        const NAME: &'static str = "Probe";
    }

    #[test]
    fn test_null_is_accepted() {
        let probe = Probe::validate(serde_json::json!({"name": "a", "expiry": null})).unwrap();
        assert!(probe.expiry.is_none());
    }

    #[test]
    fn test_missing_nullable_field_is_rejected() {
        let err = Probe::validate(serde_json::json!({"name": "a"})).unwrap_err();
        assert_eq!(err.schema, "Probe");
        assert!(err.reason.contains("expiry"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Probe::validate(serde_json::json!({
            "name": "a",
            "expiry": "1",
            "extra": true
        }))
        .unwrap_err();
        assert!(err.reason.contains("extra"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(Probe::validate(serde_json::json!({"name": 7, "expiry": null})).is_err());
    }
}
