//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async execution side lives in [`ToolHandler`](super::handler::ToolHandler).

use std::collections::HashSet;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolError;

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError>;
}

/// Default implementation of ToolValidator
///
/// Rejects missing required parameters, unknown parameters and values whose
/// JSON type does not match the declared [`ParamType`](super::entities::ParamType).
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ToolError> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None if param.required => {
                    return Err(ToolError::invalid_argument(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ))
                    .with_details(param.name.clone()));
                }
                Some(value) if !param.param_type.accepts(value) => {
                    return Err(ToolError::invalid_argument(format!(
                        "Parameter '{}' for tool '{}' must be a {}",
                        param.name, definition.name, param.param_type
                    ))
                    .with_details(param.name.clone()));
                }
                _ => {}
            }
        }

        let valid_params: HashSet<&str> =
            definition.parameters.iter().map(|p| p.name.as_str()).collect();

        // Sorted so the reported field is stable across HashMap orderings
        let mut unknown: Vec<&str> = call
            .arguments
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !valid_params.contains(k))
            .collect();
        unknown.sort_unstable();

        if !unknown.is_empty() {
            return Err(ToolError::invalid_argument(format!(
                "Unknown parameter '{}' for tool '{}'",
                unknown.join("', '"),
                definition.name
            ))
            .with_details(unknown.join(",")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ParamType, ToolParameter};

    fn domain_tool() -> ToolDefinition {
        ToolDefinition::new("getDomainOwner", "ENS lookup")
            .with_parameter(ToolParameter::new("domain", "ENS name", true))
    }

    #[test]
    fn test_validator_missing_required() {
        let call = ToolCall::new("getDomainOwner");
        let err = DefaultToolValidator.validate(&call, &domain_tool()).unwrap_err();
        assert_eq!(err.code, "INVALID_ARGUMENT");
        assert!(err.message.contains("Missing required parameter 'domain'"));
        assert_eq!(err.details.as_deref(), Some("domain"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("getDomainOwner")
            .with_arg("domain", "nouns.eth")
            .with_arg("chain", "mainnet");
        let err = DefaultToolValidator.validate(&call, &domain_tool()).unwrap_err();
        assert!(err.message.contains("Unknown parameter 'chain'"));
    }

    #[test]
    fn test_validator_wrong_type() {
        let call = ToolCall::new("getDomainOwner").with_arg("domain", 42);
        let err = DefaultToolValidator.validate(&call, &domain_tool()).unwrap_err();
        assert!(err.message.contains("must be a string"));
    }

    #[test]
    fn test_validator_no_parameters_rejects_any_argument() {
        let definition = ToolDefinition::new("getNounsProposals", "List");
        assert!(
            DefaultToolValidator
                .validate(&ToolCall::new("getNounsProposals"), &definition)
                .is_ok()
        );

        let call = ToolCall::new("getNounsProposals").with_arg("first", 5);
        assert!(DefaultToolValidator.validate(&call, &definition).is_err());
    }

    #[test]
    fn test_validator_optional_param_may_be_absent() {
        let definition = ToolDefinition::new("t", "t").with_parameter(
            ToolParameter::new("limit", "Max items", false).with_type(ParamType::Integer),
        );
        assert!(
            DefaultToolValidator
                .validate(&ToolCall::new("t"), &definition)
                .is_ok()
        );
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("getDomainOwner").with_arg("domain", "Nouns.eth");
        assert!(DefaultToolValidator.validate(&call, &domain_tool()).is_ok());
    }
}
