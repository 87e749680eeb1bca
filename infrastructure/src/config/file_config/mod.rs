//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so a partial (or absent) file is valid.

mod output;
mod subgraph;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use subgraph::FileSubgraphConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway and dataset settings
    pub subgraph: FileSubgraphConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The tools cannot work with this configuration.
    Error,
    /// The tools work, but only with substituted data.
    Warning,
}

/// A specific configuration problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("subgraph.gateway_url cannot be empty")]
    EmptyGatewayUrl,

    #[error("subgraph.{field} cannot be empty")]
    EmptySubgraphId { field: &'static str },

    #[error("subgraph.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("no Graph API key configured; tools will return sample data (set GRAPH_API_KEY)")]
    MissingApiKey,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let subgraph = &self.subgraph;

        if subgraph.gateway_url.trim().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyGatewayUrl));
        }

        for (field, value) in [
            ("ens_subgraph_id", &subgraph.ens_subgraph_id),
            ("nouns_subgraph_id", &subgraph.nouns_subgraph_id),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigValidationError::EmptySubgraphId { field },
                ));
            }
        }

        if subgraph.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidTimeout));
        }

        if subgraph.credential().is_none() {
            issues.push(ConfigIssue::warning(ConfigValidationError::MissingApiKey));
        }

        issues
    }

    /// First `Error`-severity issue, if any
    pub fn check(&self) -> Result<(), ConfigValidationError> {
        match self
            .validate()
            .into_iter()
            .find(|issue| issue.severity == Severity::Error)
        {
            Some(issue) => Err(issue.error),
            None => Ok(()),
        }
    }
}
