//! Presentation layer for onchain-lens
//!
//! This crate contains CLI definitions, the tool result views,
//! console output formatting and loading indicators.

pub mod cli;
pub mod output;
pub mod progress;
pub mod render;

// Re-export commonly used types
pub use cli::{Cli, Command, OutputFormat};
pub use output::ConsoleFormatter;
pub use progress::LoadingIndicator;
pub use render::{RendererBinding, ToolView};
