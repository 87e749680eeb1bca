//! Tool result views
//!
//! [`RendererBinding`] maps a tool name to the [`ToolView`] that knows how
//! to present its output. Real and substituted data go through the same
//! view; callers fall back to raw JSON when no view applies.

mod ens;
pub mod format;
mod proposal_detail;
mod proposals;

use std::collections::HashMap;

use colored::Colorize;
use lens_domain::{
    Failure, GET_DOMAIN_OWNER, GET_NOUNS_PROPOSAL_BY_ID, GET_NOUNS_PROPOSALS, ToolOutcome,
};

pub use ens::EnsProfileView;
pub use proposal_detail::ProposalDetailView;
pub use proposals::ProposalGridView;

/// Presentation of one tool's output
pub trait ToolView: Send + Sync {
    /// Render `data`, or `None` if it is not this tool's output shape.
    fn render(&self, data: &serde_json::Value, failure: Option<&Failure>) -> Option<String>;

    /// Placeholder shown while the call is in flight, from its arguments only
    fn render_loading(&self, args: &HashMap<String, serde_json::Value>) -> String;
}

/// Tool name → view lookup
pub struct RendererBinding {
    views: HashMap<String, Box<dyn ToolView>>,
}

impl RendererBinding {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Binding with a view for every subgraph tool
    pub fn standard() -> Self {
        Self::new()
            .with_view(GET_DOMAIN_OWNER, EnsProfileView)
            .with_view(GET_NOUNS_PROPOSALS, ProposalGridView)
            .with_view(GET_NOUNS_PROPOSAL_BY_ID, ProposalDetailView)
    }

    pub fn with_view<V: ToolView + 'static>(mut self, tool_name: &str, view: V) -> Self {
        self.views.insert(tool_name.to_string(), Box::new(view));
        self
    }

    pub fn render(&self, tool_name: &str, data: &serde_json::Value) -> Option<String> {
        self.views.get(tool_name)?.render(data, None)
    }

    /// Render an outcome, noting the failure under the view when degraded
    pub fn render_outcome(
        &self,
        tool_name: &str,
        outcome: &ToolOutcome<serde_json::Value>,
    ) -> Option<String> {
        let view = self.views.get(tool_name)?;
        let mut out = view.render(&outcome.data, outcome.failure.as_ref())?;

        if let Some(failure) = &outcome.failure {
            out.push_str(&format!(
                "\n{}\n",
                format!("({}: {})", failure.kind, failure.message).dimmed()
            ));
        }
        Some(out)
    }

    pub fn render_loading(
        &self,
        tool_name: &str,
        args: &HashMap<String, serde_json::Value>,
    ) -> Option<String> {
        self.views
            .get(tool_name)
            .map(|view| view.render_loading(args))
    }
}

impl Default for RendererBinding {
    fn default() -> Self {
        Self::standard()
    }
}
