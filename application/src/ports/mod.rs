pub mod subgraph;
pub mod tool_executor;
pub mod tool_schema;
