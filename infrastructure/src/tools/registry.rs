//! Tool Registry
//!
//! The [`ToolRegistry`] maps tool names to [`ToolHandler`]s and implements
//! [`ToolExecutorPort`]. It owns the [`ToolSpec`] catalogue exposed to the
//! orchestrator and is the single place where argument validation happens.
//!
//! # Usage
//!
//! ```ignore
//! use lens_infrastructure::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new()
//!     .register(GetDomainOwnerUseCase::new(subgraph.clone()))
//!     .register(GetNounsProposalsUseCase::new(subgraph));
//!
//! let call = ToolCall::new("getDomainOwner").with_arg("domain", "nouns.eth");
//! let outcome = registry.execute(&call).await?;
//! ```
//!
//! # Dispatch
//!
//! 1. Unknown tool name → `NOT_FOUND`
//! 2. Arguments checked against the definition → `INVALID_ARGUMENT`
//! 3. Handler invoked; its [`ToolOutcome`] is returned as-is

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use lens_application::ports::tool_executor::ToolExecutorPort;
use lens_domain::tool::{
    entities::{ToolCall, ToolSpec},
    handler::ToolHandler,
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolOutcome},
};

/// Name-keyed tool registry
pub struct ToolRegistry {
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    tool_spec: ToolSpec,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            tool_spec: ToolSpec::new(),
            validator: DefaultToolValidator,
        }
    }

    /// Register a tool handler under its definition's name
    pub fn register<H: ToolHandler + 'static>(self, handler: H) -> Self {
        self.register_arc(Arc::new(handler))
    }

    /// Register a tool handler (Arc version)
    ///
    /// A later registration with the same name replaces the earlier one.
    pub fn register_arc(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        let definition = handler.definition().clone();
        tracing::debug!(tool = %definition.name, "Registered tool");
        self.handlers.insert(definition.name.clone(), handler);
        self.tool_spec = self.tool_spec.register(definition);
        self
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
        let Some(handler) = self.handlers.get(&call.tool_name) else {
            tracing::warn!(tool = %call.tool_name, "Unknown tool requested");
            return Err(ToolError::unknown_tool(&call.tool_name));
        };

        if let Err(e) = self.validator.validate(call, handler.definition()) {
            tracing::warn!(tool = %call.tool_name, error = %e, "Rejected tool call");
            return Err(e);
        }

        let start = Instant::now();
        let outcome = handler.invoke(call).await?;

        tracing::info!(
            tool = %call.tool_name,
            ok = outcome.ok,
            failure = outcome.failure_kind().map(|k| k.to_string()).unwrap_or_default(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tool call completed"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_domain::tool::entities::{ParamType, ToolDefinition, ToolParameter};
    use lens_domain::tool::value_objects::{Failure, FailureKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes its `text` argument; fails softly on "boom".
    struct EchoTool {
        definition: ToolDefinition,
        calls: AtomicUsize,
    }

    impl EchoTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("echo", "Echo the input").with_parameter(
                    ToolParameter::new("text", "Text to echo", true).with_type(ParamType::String),
                ),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ToolHandler for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn invoke(
            &self,
            call: &ToolCall,
        ) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = call.get_string("text").unwrap_or_default();
            let data = serde_json::json!({ "text": text });
            if text == "boom" {
                Ok(ToolOutcome::degraded(
                    data,
                    Failure::new(FailureKind::Transport, "boom"),
                ))
            } else {
                Ok(ToolOutcome::success(data))
            }
        }
    }

    #[tokio::test]
    async fn test_dispatches_to_registered_handler() {
        let registry = ToolRegistry::new().register(EchoTool::new());

        let outcome = registry
            .execute(&ToolCall::new("echo").with_arg("text", "hello"))
            .await
            .unwrap();

        assert!(outcome.ok);
        assert_eq!(outcome.data["text"], "hello");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let registry = ToolRegistry::new().register(EchoTool::new());

        let err = registry.execute(&ToolCall::new("missing")).await.unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_handler() {
        let echo = Arc::new(EchoTool::new());
        let registry = ToolRegistry::new().register_arc(echo.clone());

        let missing = registry.execute(&ToolCall::new("echo")).await.unwrap_err();
        assert_eq!(missing.code, "INVALID_ARGUMENT");
        assert_eq!(missing.details.as_deref(), Some("text"));

        let wrong_type = registry
            .execute(&ToolCall::new("echo").with_arg("text", 42))
            .await
            .unwrap_err();
        assert_eq!(wrong_type.code, "INVALID_ARGUMENT");

        let extra = registry
            .execute(
                &ToolCall::new("echo")
                    .with_arg("text", "hi")
                    .with_arg("loud", true),
            )
            .await
            .unwrap_err();
        assert_eq!(extra.details.as_deref(), Some("loud"));

        assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_degraded_outcome_is_not_an_error() {
        let registry = ToolRegistry::new().register(EchoTool::new());

        let outcome = registry
            .execute(&ToolCall::new("echo").with_arg("text", "boom"))
            .await
            .unwrap();

        assert!(!outcome.ok);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Transport));
    }

    #[tokio::test]
    async fn test_execute_all_preserves_order() {
        let registry = ToolRegistry::new().register(EchoTool::new());
        let calls = vec![
            ToolCall::new("echo").with_arg("text", "first"),
            ToolCall::new("nope"),
            ToolCall::new("echo").with_arg("text", "third"),
        ];

        let results = registry.execute_all(&calls).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().data["text"], "first");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().data["text"], "third");
    }

    #[test]
    fn test_tool_spec_lists_registered_tools() {
        let registry = ToolRegistry::new().register(EchoTool::new());

        assert!(registry.has_tool("echo"));
        assert_eq!(registry.available_tools(), vec!["echo"]);
        assert_eq!(registry.tool_spec().len(), 1);
    }
}
