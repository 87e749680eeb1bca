//! Tool domain module
//!
//! This module defines the core abstractions for the **Tool System**: how an
//! orchestrator (a language model driving a conversation) invokes named,
//! schema-described functions that fetch subgraph data.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolOutcome<D>   │
//! │ (catalogue)  │    │ (invocation) │    │ { ok, data, .. } │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//! ```
//!
//! # Output contract
//!
//! Every handled invocation returns a [`ToolOutcome`] whose `data` has the
//! same shape whether it is real or substituted. Only contract violations
//! (unknown tool, malformed arguments) produce a [`ToolError`].
//!
//! # Key Types
//!
//! - [`ToolSpec`]: catalogue of tool definitions keyed by name
//! - [`ToolDefinition`]: name, description and parameter schema
//! - [`ToolCall`]: raw invocation with untyped JSON arguments
//! - [`ToolValidator`]: pure parameter validation
//! - [`ToolHandler`]: async seam implemented by each tool

pub mod entities;
pub mod handler;
pub mod traits;
pub mod value_objects;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use handler::ToolHandler;
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{Failure, FailureKind, ToolError, ToolOutcome};
