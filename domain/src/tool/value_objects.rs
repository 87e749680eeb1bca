//! Tool domain value objects: immutable outcome and error types
//!
//! These types form the **output side** of a tool invocation:
//!
//! - [`ToolOutcome`] is what every handled invocation returns. `data` always
//!   has the tool's canonical output shape, whether it is real or a fallback.
//! - [`ToolError`] is reserved for contract violations (unknown tool,
//!   malformed arguments). It is never used to report upstream failures.

use serde::{Deserialize, Serialize};

/// Contract violation raised for a malformed tool invocation.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing, unknown or wrongly typed parameter |
/// | `NOT_FOUND` | Unknown tool name |
/// | `INTERNAL` | Output could not be serialized |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "INVALID_ARGUMENT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details (the offending field, when known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", name.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Category of a handled failure, reported alongside fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingCredential,
    Transport,
    SchemaMismatch,
    Empty,
    NotFound,
    Unexpected,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::Transport => "transport",
            FailureKind::SchemaMismatch => "schema_mismatch",
            FailureKind::Empty => "empty",
            FailureKind::NotFound => "not_found",
            FailureKind::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic block attached to a non-`ok` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of a tool invocation.
///
/// `data` conforms to the tool's output type in both cases; `ok` and
/// `failure` exist for diagnostics so that consumers never need to branch on
/// them to know which fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutcome<D> {
    pub ok: bool,
    pub data: D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

impl<D> ToolOutcome<D> {
    /// Real, validated upstream data
    pub fn success(data: D) -> Self {
        Self {
            ok: true,
            data,
            failure: None,
        }
    }

    /// Substituted data carrying the reason it was substituted
    pub fn degraded(data: D, failure: Failure) -> Self {
        Self {
            ok: false,
            data,
            failure: Some(failure),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }
}

impl<D: Serialize> ToolOutcome<D> {
    /// Erase the data type for transport to the orchestrator.
    pub fn into_json(self) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
        let data = serde_json::to_value(&self.data)
            .map_err(|e| ToolError::internal(format!("Failed to serialize tool output: {}", e)))?;
        Ok(ToolOutcome {
            ok: self.ok,
            data,
            failure: self.failure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error() {
        let err = ToolError::invalid_argument("Missing domain").with_details("domain");

        assert_eq!(err.code, "INVALID_ARGUMENT");
        assert_eq!(err.to_string(), "[INVALID_ARGUMENT] Missing domain (domain)");
        assert_eq!(ToolError::unknown_tool("x").code, "NOT_FOUND");
    }

    #[test]
    fn test_success_serializes_without_failure() {
        let outcome = ToolOutcome::success(vec![1, 2]);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json, serde_json::json!({"ok": true, "data": [1, 2]}));
    }

    #[test]
    fn test_degraded_serializes_failure() {
        let outcome = ToolOutcome::degraded(
            Vec::<u8>::new(),
            Failure::new(FailureKind::Transport, "HTTP 502"),
        );
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(json["failure"]["kind"], "transport");
        assert_eq!(json["failure"]["message"], "HTTP 502");
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Transport));
    }

    #[test]
    fn test_into_json_keeps_flags() {
        let outcome = ToolOutcome::degraded("x", Failure::new(FailureKind::Empty, "none"));
        let erased = outcome.into_json().unwrap();

        assert!(!erased.ok);
        assert_eq!(erased.data, serde_json::json!("x"));
        assert_eq!(erased.failure_kind(), Some(FailureKind::Empty));
    }
}
