//! ENS name-registry records and the domain-owner lookup contract.

use serde::{Deserialize, Serialize};

use crate::schema::{ResponseSchema, required_nullable};
use crate::tool::{ToolCall, ToolError};

/// Tool name for the domain-owner lookup
pub const GET_DOMAIN_OWNER: &str = "getDomainOwner";

/// Account that owns a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Owner {
    pub id: String,
}

/// Resolver contract attached to a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resolver {
    #[serde(deserialize_with = "required_nullable")]
    pub address: Option<String>,
    /// Keys of the text records set on the resolver
    #[serde(deserialize_with = "required_nullable")]
    pub texts: Option<Vec<String>>,
}

/// One name-registry entry, as indexed by the ENS subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: String,
    pub name: String,
    pub owner: Owner,
    #[serde(deserialize_with = "required_nullable")]
    pub resolver: Option<Resolver>,
    /// Unix seconds, as a decimal string
    pub created_at: String,
    /// Unix seconds, as a decimal string
    #[serde(deserialize_with = "required_nullable")]
    pub expiry_date: Option<String>,
}

impl DomainRecord {
    /// Text record keys, empty when there is no resolver or no records
    pub fn text_keys(&self) -> &[String] {
        self.resolver
            .as_ref()
            .and_then(|r| r.texts.as_deref())
            .unwrap_or(&[])
    }
}

/// Output `data` of the domain-owner tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainsData {
    pub domains: Vec<DomainRecord>,
}

/// Upstream reply envelope: `{ "data": { "domains": [...] } }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainResponse {
    pub data: DomainsData,
}

impl ResponseSchema for DomainResponse {
    const NAME: &'static str = "DomainResponse";
}

/// Typed parameters of the domain-owner tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOwnerParams {
    /// Name as supplied by the orchestrator
    pub domain: String,
}

impl DomainOwnerParams {
    /// Name in the lower-case form the registry stores
    pub fn normalized(&self) -> String {
        self.domain.to_lowercase()
    }
}

impl TryFrom<&ToolCall> for DomainOwnerParams {
    type Error = ToolError;

    fn try_from(call: &ToolCall) -> Result<Self, Self::Error> {
        let domain = call
            .require_string("domain")
            .map_err(|e| ToolError::invalid_argument(e).with_details("domain"))?;
        Ok(Self {
            domain: domain.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> serde_json::Value {
        serde_json::json!({
            "id": "0xfd6a6b0e99f83df16a5b0dfa9ce74d3a6026b2c2f06eea38e8506c18633fe359",
            "name": "wais.eth",
            "owner": { "id": "0x5985062af881373d5429a99e389f83697aa217e5" },
            "resolver": {
                "address": "0x4976fb03c32e5b8cfe2b6ccb31c09ba78ebaba41",
                "texts": ["avatar"]
            },
            "createdAt": "1647724305",
            "expiryDate": "1781686209"
        })
    }

    #[test]
    fn test_validate_well_formed_response() {
        let raw = serde_json::json!({ "data": { "domains": [sample_record()] } });
        let response = DomainResponse::validate(raw).unwrap();

        let domain = &response.data.domains[0];
        assert_eq!(domain.name, "wais.eth");
        assert_eq!(domain.text_keys(), &["avatar".to_string()]);
        assert_eq!(domain.expiry_date.as_deref(), Some("1781686209"));
    }

    #[test]
    fn test_null_resolver_and_expiry() {
        let mut record = sample_record();
        record["resolver"] = serde_json::Value::Null;
        record["expiryDate"] = serde_json::Value::Null;
        let raw = serde_json::json!({ "data": { "domains": [record] } });

        let response = DomainResponse::validate(raw).unwrap();
        assert!(response.data.domains[0].resolver.is_none());
        assert!(response.data.domains[0].text_keys().is_empty());
    }

    #[test]
    fn test_missing_owner_is_rejected() {
        let mut record = sample_record();
        record.as_object_mut().unwrap().remove("owner");
        let raw = serde_json::json!({ "data": { "domains": [record] } });

        assert!(DomainResponse::validate(raw).is_err());
    }

    #[test]
    fn test_graphql_errors_envelope_is_rejected() {
        let raw = serde_json::json!({ "errors": [{ "message": "bad indexers" }] });
        assert!(DomainResponse::validate(raw).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let record: DomainRecord = serde_json::from_value(sample_record()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, sample_record());
    }

    #[test]
    fn test_params_normalize_case() {
        let call = ToolCall::new(GET_DOMAIN_OWNER).with_arg("domain", "Vitalik.ETH");
        let params = DomainOwnerParams::try_from(&call).unwrap();

        assert_eq!(params.domain, "Vitalik.ETH");
        assert_eq!(params.normalized(), "vitalik.eth");
    }

    #[test]
    fn test_params_require_domain() {
        let err = DomainOwnerParams::try_from(&ToolCall::new(GET_DOMAIN_OWNER)).unwrap_err();
        assert_eq!(err.code, "INVALID_ARGUMENT");
    }
}
