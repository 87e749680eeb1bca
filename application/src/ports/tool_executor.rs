//! Tool Executor port
//!
//! Defines the orchestrator-facing interface for invoking tools by name.

use async_trait::async_trait;
use lens_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolOutcome},
};

/// Port for tool execution
///
/// Implementations (adapters) live in the infrastructure layer. `Err` is
/// reserved for contract violations; every handled runtime failure comes
/// back as a non-`ok` [`ToolOutcome`].
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Get names of all available tools, sorted
    fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tool_spec().names().collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call
    async fn execute(&self, call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError>;

    /// Execute independent calls concurrently, results in input order.
    async fn execute_all(
        &self,
        calls: &[ToolCall],
    ) -> Vec<Result<ToolOutcome<serde_json::Value>, ToolError>> {
        use futures::future::join_all;

        join_all(calls.iter().map(|call| self.execute(call))).await
    }
}
