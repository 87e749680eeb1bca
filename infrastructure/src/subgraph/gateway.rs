//! HTTP client for The Graph gateway.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use lens_application::ports::subgraph::{SubgraphError, SubgraphPort};
use lens_domain::{Dataset, GraphQuery};
use reqwest::Url;
use tracing::{debug, warn};

/// Hosted gateway used when no override is configured
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.thegraph.com";

/// Connection settings for [`GraphGatewayClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Base URL without trailing slash, e.g. `https://gateway.thegraph.com`
    pub gateway_url: String,
    /// Gateway API key; `None` or blank disables all network access
    pub api_key: Option<String>,
    pub ens_subgraph_id: String,
    pub nouns_subgraph_id: String,
    /// Overall request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_key: None,
            ens_subgraph_id: Dataset::Ens.default_subgraph_id().to_string(),
            nouns_subgraph_id: Dataset::NounsDao.default_subgraph_id().to_string(),
            timeout: None,
        }
    }
}

impl GatewayConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into();
        self
    }

    /// The configured key, if it is non-blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn subgraph_id(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Ens => &self.ens_subgraph_id,
            Dataset::NounsDao => &self.nouns_subgraph_id,
        }
    }

    /// `<gateway>/api/<key>/subgraphs/id/<id>`, each segment percent-encoded
    fn endpoint_with_key(&self, dataset: Dataset, key: &str) -> Result<Url, SubgraphError> {
        let mut url = Url::parse(&self.gateway_url)
            .map_err(|e| SubgraphError::Request(format!("invalid gateway URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SubgraphError::Request("gateway URL is not a base URL".to_string()))?
            .pop_if_empty()
            .extend(["api", key, "subgraphs", "id", self.subgraph_id(dataset)]);
        Ok(url)
    }

    /// Endpoint URL with the key masked, safe for logs
    pub fn redacted_endpoint(&self, dataset: Dataset) -> String {
        format!(
            "{}/api/<redacted>/subgraphs/id/{}",
            self.gateway_url.trim_end_matches('/'),
            self.subgraph_id(dataset)
        )
    }
}

/// [`SubgraphPort`] adapter backed by one shared `reqwest::Client`.
///
/// The credential is fixed at construction. Without one, every query
/// returns [`SubgraphError::MissingCredential`] before any I/O.
pub struct GraphGatewayClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl GraphGatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self, SubgraphError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("onchain-lens/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SubgraphError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.credential().is_some()
    }
}

#[async_trait]
impl SubgraphPort for GraphGatewayClient {
    async fn query(
        &self,
        dataset: Dataset,
        query: &GraphQuery,
    ) -> Result<serde_json::Value, SubgraphError> {
        let Some(key) = self.config.credential() else {
            debug!("No Graph API key configured, skipping {} query", dataset);
            return Err(SubgraphError::MissingCredential);
        };

        let start = Instant::now();
        let redacted = self.config.redacted_endpoint(dataset);
        debug!("POST {}", redacted);

        // reqwest errors embed the URL, which carries the key
        let request = self
            .client
            .post(self.config.endpoint_with_key(dataset, key)?)
            .json(query)
            .build()
            .map_err(|e| SubgraphError::Request(e.without_url().to_string()))?;

        let response = self.client.execute(request).await.map_err(|e| {
            let e = e.without_url();
            warn!("Request to {} failed: {}", redacted, e);
            SubgraphError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", redacted, status.as_u16());
            return Err(SubgraphError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SubgraphError::Decode(e.without_url().to_string()))?;

        debug!(
            "{} answered in {}ms",
            dataset,
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}
