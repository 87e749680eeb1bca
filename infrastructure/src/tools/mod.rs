//! Tool wiring for the orchestrator
//!
//! - [`ToolRegistry`]: name → handler dispatch with argument validation
//! - [`JsonSchemaToolConverter`]: catalogue export as JSON Schema
//! - [`default_toolset`]: registry preloaded with every subgraph tool

mod registry;
mod schema;

use std::sync::Arc;

pub use registry::ToolRegistry;
pub use schema::JsonSchemaToolConverter;

use lens_application::ports::subgraph::SubgraphPort;
use lens_application::{GetDomainOwnerUseCase, GetNounsProposalsUseCase, GetProposalByIdUseCase};

/// Create a registry with all subgraph tools sharing one adapter
pub fn default_toolset(subgraph: Arc<dyn SubgraphPort>) -> ToolRegistry {
    ToolRegistry::new()
        .register(GetDomainOwnerUseCase::new(subgraph.clone()))
        .register(GetNounsProposalsUseCase::new(subgraph.clone()))
        .register(GetProposalByIdUseCase::new(subgraph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::{GatewayConfig, GraphGatewayClient};
    use lens_application::ports::tool_executor::ToolExecutorPort;
    use lens_domain::{FailureKind, ToolCall};
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn toolset_for(server: &MockServer) -> ToolRegistry {
        let config = GatewayConfig::default()
            .with_gateway_url(server.uri())
            .with_api_key("test-key");
        default_toolset(Arc::new(GraphGatewayClient::new(config).unwrap()))
    }

    #[test]
    fn test_default_toolset_registers_all_tools() {
        let registry = default_toolset(Arc::new(
            GraphGatewayClient::new(GatewayConfig::default()).unwrap(),
        ));

        assert_eq!(
            registry.available_tools(),
            vec!["getDomainOwner", "getNounsProposalById", "getNounsProposals"]
        );
    }

    #[tokio::test]
    async fn test_domain_lookup_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "domains": [{
                    "id": "0xabc",
                    "name": "nouns.eth",
                    "owner": { "id": "0x0bc3807ec262cb779b38d65b38158acc3bfede10" },
                    "resolver": null,
                    "createdAt": "1580398453",
                    "expiryDate": null
                }] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = toolset_for(&server)
            .execute(&ToolCall::new("getDomainOwner").with_arg("domain", "Nouns.ETH"))
            .await
            .unwrap();

        assert!(outcome.ok);
        assert_eq!(outcome.data["domains"][0]["name"], "nouns.eth");
        assert!(outcome.data["domains"][0]["resolver"].is_null());
    }

    #[tokio::test]
    async fn test_upstream_error_degrades_through_registry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = toolset_for(&server)
            .execute(&ToolCall::new("getNounsProposalById").with_arg("id", "7"))
            .await
            .unwrap();

        assert!(!outcome.ok);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Transport));
        assert_eq!(outcome.data["proposal"]["id"], "error");
        assert_eq!(outcome.data["proposal"]["status"], "ERROR");
    }
}
