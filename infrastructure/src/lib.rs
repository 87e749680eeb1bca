//! Infrastructure layer for onchain-lens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod subgraph;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileOutputFormat, FileSubgraphConfig, Severity,
};
pub use subgraph::{GatewayConfig, GraphGatewayClient};
pub use tools::{JsonSchemaToolConverter, ToolRegistry, default_toolset};
