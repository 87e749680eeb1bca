//! `getNounsProposals`: latest active Nouns DAO proposals.
//!
//! Every failure degrades to a one-element placeholder list, so the list
//! presentation never needs a separate empty state.

use std::sync::Arc;

use async_trait::async_trait;
use lens_domain::{
    Dataset, FailureCategory, Fallback, GET_NOUNS_PROPOSALS, GraphQuery, ProposalsData,
    ProposalsResponse, ToolCall, ToolDefinition, ToolError, ToolHandler, ToolOutcome,
};
use tracing::info;

use super::shared::{fetch_validated, now_unix};
use crate::ports::subgraph::SubgraphPort;

/// Tool definition for `getNounsProposals` (no parameters)
pub fn nouns_proposals_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_NOUNS_PROPOSALS,
        "Get the latest active Nouns DAO governance proposals",
    )
}

pub struct GetNounsProposalsUseCase {
    subgraph: Arc<dyn SubgraphPort>,
    definition: ToolDefinition,
}

impl GetNounsProposalsUseCase {
    pub fn new(subgraph: Arc<dyn SubgraphPort>) -> Self {
        Self {
            subgraph,
            definition: nouns_proposals_definition(),
        }
    }

    pub async fn execute(&self) -> ToolOutcome<ProposalsData> {
        let query = GraphQuery::latest_active_proposals();

        let result =
            fetch_validated::<ProposalsResponse>(self.subgraph.as_ref(), Dataset::NounsDao, &query)
                .await
                .and_then(|response| {
                    if response.data.proposals.is_empty() {
                        Err(FailureCategory::Empty(
                            "No active proposals found".to_string(),
                        ))
                    } else {
                        Ok(response.data)
                    }
                });

        match result {
            Ok(data) => {
                info!("Fetched {} active proposals", data.proposals.len());
                ToolOutcome::success(data)
            }
            Err(category) => {
                info!("Substituting proposal list: {}", category);
                ToolOutcome::degraded(
                    ProposalsData::fallback(&category, now_unix()),
                    category.to_failure(),
                )
            }
        }
    }
}

#[async_trait]
impl ToolHandler for GetNounsProposalsUseCase {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, _call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
        self.execute().await.into_json()
    }
}
