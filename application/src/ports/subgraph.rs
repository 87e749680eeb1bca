//! Subgraph query port
//!
//! Defines the interface for posting one GraphQL query to an indexed dataset
//! and getting back the raw, not-yet-trusted JSON body.

use async_trait::async_trait;
use lens_domain::{Dataset, FailureCategory, GraphQuery};
use thiserror::Error;

/// Transport-level failures of a subgraph query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubgraphError {
    /// No API key is configured; no request was sent
    #[error("Graph API key is not configured")]
    MissingCredential,

    #[error("Subgraph returned HTTP {status}")]
    Status { status: u16 },

    #[error("Request to subgraph failed: {0}")]
    Network(String),

    #[error("Failed to decode subgraph response: {0}")]
    Decode(String),

    /// The request could not be constructed (e.g. malformed endpoint)
    #[error("Failed to build subgraph request: {0}")]
    Request(String),
}

impl SubgraphError {
    /// Classify for fallback generation
    pub fn category(&self) -> FailureCategory {
        match self {
            SubgraphError::MissingCredential => FailureCategory::MissingCredential,
            SubgraphError::Status { .. } | SubgraphError::Network(_) | SubgraphError::Decode(_) => {
                FailureCategory::Transport(self.to_string())
            }
            SubgraphError::Request(_) => FailureCategory::Unexpected(self.to_string()),
        }
    }
}

/// Port for querying an indexing service.
///
/// Implementations issue exactly one request per call: no retries, no
/// pagination. They do not validate the body beyond decoding it as JSON.
#[async_trait]
pub trait SubgraphPort: Send + Sync {
    async fn query(
        &self,
        dataset: Dataset,
        query: &GraphQuery,
    ) -> Result<serde_json::Value, SubgraphError>;
}
