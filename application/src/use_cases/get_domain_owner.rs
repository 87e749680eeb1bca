//! `getDomainOwner`: ENS name ownership lookup.
//!
//! No placeholder record is ever synthesized. Failures return an empty
//! `domains` list with a failure block; a name with no match is `not_found`.

use std::sync::Arc;

use async_trait::async_trait;
use lens_domain::{
    Dataset, DomainOwnerParams, DomainResponse, DomainsData, Failure, FailureCategory,
    FailureKind, GET_DOMAIN_OWNER, GraphQuery, ParamType, ToolCall, ToolDefinition, ToolError,
    ToolHandler, ToolOutcome, ToolParameter,
};
use tracing::info;

use super::shared::fetch_validated;
use crate::ports::subgraph::SubgraphPort;

/// Tool definition for `getDomainOwner`
pub fn domain_owner_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_DOMAIN_OWNER,
        "Get the ENS domain owner information for a given ENS domain name",
    )
    .with_parameter(
        ToolParameter::new(
            "domain",
            "ENS domain name to lookup (e.g., \"vitalik.eth\")",
            true,
        )
        .with_type(ParamType::String),
    )
}

pub struct GetDomainOwnerUseCase {
    subgraph: Arc<dyn SubgraphPort>,
    definition: ToolDefinition,
}

impl GetDomainOwnerUseCase {
    pub fn new(subgraph: Arc<dyn SubgraphPort>) -> Self {
        Self {
            subgraph,
            definition: domain_owner_definition(),
        }
    }

    pub async fn execute(&self, params: &DomainOwnerParams) -> ToolOutcome<DomainsData> {
        let query = GraphQuery::domain_details(&params.normalized());

        let response =
            match fetch_validated::<DomainResponse>(self.subgraph.as_ref(), Dataset::Ens, &query)
                .await
            {
                Ok(response) => response,
                Err(category) => {
                    info!("ENS lookup for {} failed: {}", params.domain, category);
                    return ToolOutcome::degraded(DomainsData::default(), describe(&category));
                }
            };

        if response.data.domains.is_empty() {
            info!("No ENS domain found for {}", params.domain);
            return ToolOutcome::degraded(
                DomainsData::default(),
                Failure::new(
                    FailureKind::NotFound,
                    format!("No ENS domain found for {}", params.domain),
                ),
            );
        }

        ToolOutcome::success(response.data)
    }
}

/// Failure block for a lookup that never reached a usable response
fn describe(category: &FailureCategory) -> Failure {
    let message = match category {
        FailureCategory::MissingCredential => "Graph API key is not configured".to_string(),
        FailureCategory::Transport(reason) => format!("Failed to fetch ENS data: {}", reason),
        FailureCategory::SchemaMismatch(reason) => {
            reason.replacen("Invalid data format", "Invalid ENS data format", 1)
        }
        FailureCategory::Empty(reason) => reason.clone(),
        FailureCategory::Unexpected(reason) => {
            format!("Failed to fetch ENS domain information: {}", reason)
        }
    };
    Failure::new(category.kind(), message)
}

#[async_trait]
impl ToolHandler for GetDomainOwnerUseCase {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutcome<serde_json::Value>, ToolError> {
        let params = DomainOwnerParams::try_from(call)?;
        self.execute(&params).await.into_json()
    }
}
