//! Tool handler abstraction
//!
//! A [`ToolHandler`] is one named, schema-described tool. The registry owns
//! a set of handlers, validates each [`ToolCall`] against the handler's
//! [`ToolDefinition`] and only then calls [`ToolHandler::invoke`].
//!
//! ```text
//! ToolCall ──▶ registry lookup ──▶ DefaultToolValidator ──▶ ToolHandler::invoke
//!                  │ unknown             │ invalid                 │
//!                  ▼                     ▼                         ▼
//!            ToolError NOT_FOUND   ToolError INVALID_ARGUMENT   ToolOutcome { ok, data }
//! ```
//!
//! Handled runtime failures (missing credential, transport, schema mismatch,
//! empty result) never surface as `Err`; they are folded into the outcome.

use async_trait::async_trait;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::{ToolError, ToolOutcome};

#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Definition exposed to the orchestrator; its name is the registry key
    fn definition(&self) -> &ToolDefinition;

    /// Invoke the tool.
    ///
    /// Returns `Err` only for contract violations, i.e. arguments that do not
    /// fit the typed parameter object.
    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError>;
}
