//! Console output for tool results

use colored::Colorize;
use lens_domain::{ToolError, ToolOutcome};

use crate::render::RendererBinding;

/// Formats tool outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Rendered view, or pretty JSON when the tool has no view
    pub fn format_card(
        binding: &RendererBinding,
        tool_name: &str,
        outcome: &ToolOutcome<serde_json::Value>,
    ) -> String {
        binding
            .render_outcome(tool_name, outcome)
            .unwrap_or_else(|| Self::format_json(outcome))
    }

    /// Format as JSON
    pub fn format_json(outcome: &ToolOutcome<serde_json::Value>) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Contract violation, for stderr
    pub fn format_error(error: &ToolError) -> String {
        let mut out = format!("{} {}", "Error:".red().bold(), error.message);
        if let Some(details) = &error.details {
            out.push_str(&format!(" {}", format!("({})", details).dimmed()));
        }
        out.push_str(&format!(" {}", format!("[{}]", error.code).dimmed()));
        out
    }

    /// Tool catalogue as a pretty JSON array
    pub fn format_schemas(schemas: &[serde_json::Value]) -> String {
        serde_json::to_string_pretty(schemas).unwrap_or_else(|_| "[]".to_string())
    }
}
