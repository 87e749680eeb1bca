//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON type accepted for a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        }
    }

    /// Check whether a JSON value is acceptable for this type
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Boolean => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool that can be invoked by the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique, stable name of the tool (e.g., "getDomainOwner")
    pub name: String,
    /// Natural-language capability summary for the orchestrator
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Accepted JSON type
    pub param_type: ParamType,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParamType::String,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }
}

/// Catalogue of tools exposed to the orchestrator
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with raw, orchestrator-supplied arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Build a call from a JSON object of arguments.
    ///
    /// `null` is treated as "no arguments"; any other non-object value is
    /// returned back as the error.
    pub fn from_json_args(
        tool_name: impl Into<String>,
        args: serde_json::Value,
    ) -> Result<Self, serde_json::Value> {
        let arguments = match args {
            serde_json::Value::Null => HashMap::new(),
            serde_json::Value::Object(map) => map.into_iter().collect(),
            other => return Err(other),
        };
        Ok(Self {
            tool_name: tool_name.into(),
            arguments,
        })
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("getDomainOwner", "Lookup ENS owner").with_parameter(
            ToolParameter::new("domain", "ENS name", true).with_type(ParamType::String),
        );

        assert_eq!(tool.name, "getDomainOwner");
        assert_eq!(tool.parameters.len(), 1);
        assert!(tool.parameter("domain").is_some());
        assert!(tool.parameter("name").is_none());
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("getNounsProposals", "List"))
            .register(ToolDefinition::new("getNounsProposalById", "Detail"));

        assert!(spec.get("getNounsProposals").is_some());
        assert!(spec.get("getNounsProposalById").is_some());
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_param_type_accepts() {
        assert!(ParamType::String.accepts(&serde_json::json!("x")));
        assert!(!ParamType::String.accepts(&serde_json::json!(42)));
        assert!(ParamType::Integer.accepts(&serde_json::json!(42)));
        assert!(!ParamType::Integer.accepts(&serde_json::json!(4.2)));
        assert!(ParamType::Number.accepts(&serde_json::json!(4.2)));
        assert!(ParamType::Boolean.accepts(&serde_json::json!(true)));
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("getNounsProposalById").with_arg("id", "42");

        assert_eq!(call.get_string("id"), Some("42"));
        assert_eq!(call.require_string("id").unwrap(), "42");
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_from_json_args() {
        let call =
            ToolCall::from_json_args("getDomainOwner", serde_json::json!({"domain": "nouns.eth"}))
                .unwrap();
        assert_eq!(call.get_string("domain"), Some("nouns.eth"));

        let empty = ToolCall::from_json_args("getNounsProposals", serde_json::Value::Null).unwrap();
        assert!(empty.arguments.is_empty());

        assert!(ToolCall::from_json_args("x", serde_json::json!([1, 2])).is_err());
    }
}
