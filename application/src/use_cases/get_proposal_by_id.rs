//! `getNounsProposalById`: full detail record for one proposal.
//!
//! Failures degrade to one synthetic [`ProposalDetail`](lens_domain::ProposalDetail)
//! whose `description` explains what went wrong.

use std::sync::Arc;

use async_trait::async_trait;
use lens_domain::{
    Dataset, FailureCategory, Fallback, GET_NOUNS_PROPOSAL_BY_ID, GraphQuery, ParamType,
    ProposalByIdParams, ProposalData, ProposalResponse, ToolCall, ToolDefinition, ToolError,
    ToolHandler, ToolOutcome, ToolParameter,
};
use tracing::info;

use super::shared::{fetch_validated, now_unix};
use crate::ports::subgraph::SubgraphPort;

/// Tool definition for `getNounsProposalById`
pub fn proposal_by_id_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_NOUNS_PROPOSAL_BY_ID,
        "Get a specific Nouns DAO governance proposal by ID",
    )
    .with_parameter(
        ToolParameter::new("id", "The ID of the proposal to fetch", true)
            .with_type(ParamType::String),
    )
}

pub struct GetProposalByIdUseCase {
    subgraph: Arc<dyn SubgraphPort>,
    definition: ToolDefinition,
}

impl GetProposalByIdUseCase {
    pub fn new(subgraph: Arc<dyn SubgraphPort>) -> Self {
        Self {
            subgraph,
            definition: proposal_by_id_definition(),
        }
    }

    pub async fn execute(&self, params: &ProposalByIdParams) -> ToolOutcome<ProposalData> {
        let query = GraphQuery::proposal_by_id(&params.id);

        let result =
            fetch_validated::<ProposalResponse>(self.subgraph.as_ref(), Dataset::NounsDao, &query)
                .await
                .and_then(|response| {
                    response.data.proposal.ok_or_else(|| {
                        FailureCategory::Empty(format!("No proposal found with id {}", params.id))
                    })
                });

        match result {
            Ok(proposal) => {
                info!("Fetched proposal {}", proposal.id);
                ToolOutcome::success(ProposalData { proposal })
            }
            Err(category) => {
                info!("Substituting proposal {}: {}", params.id, category);
                ToolOutcome::degraded(
                    ProposalData::fallback(&category, now_unix()),
                    category.to_failure(),
                )
            }
        }
    }
}

#[async_trait]
impl ToolHandler for GetProposalByIdUseCase {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
        let params = ProposalByIdParams::try_from(call)?;
        self.execute(&params).await.into_json()
    }
}
