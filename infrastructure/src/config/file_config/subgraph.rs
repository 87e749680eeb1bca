//! Gateway configuration from TOML (`[subgraph]` section)

use std::time::Duration;

use lens_domain::Dataset;
use serde::{Deserialize, Serialize};

use crate::subgraph::{DEFAULT_GATEWAY_URL, GatewayConfig};

/// Raw gateway configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubgraphConfig {
    /// Gateway base URL
    pub gateway_url: String,
    /// Gateway API key (usually supplied as `GRAPH_API_KEY`)
    pub api_key: Option<String>,
    /// Subgraph deployment id for ENS
    pub ens_subgraph_id: String,
    /// Subgraph deployment id for Nouns DAO
    pub nouns_subgraph_id: String,
    /// Request timeout in seconds (unset = no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for FileSubgraphConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_key: None,
            ens_subgraph_id: Dataset::Ens.default_subgraph_id().to_string(),
            nouns_subgraph_id: Dataset::NounsDao.default_subgraph_id().to_string(),
            timeout_secs: None,
        }
    }
}

impl FileSubgraphConfig {
    /// Non-blank API key, if any
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            gateway_url: self.gateway_url.trim().to_string(),
            api_key: self.credential().map(str::to_string),
            ens_subgraph_id: self.ens_subgraph_id.trim().to_string(),
            nouns_subgraph_id: self.nouns_subgraph_id.trim().to_string(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
