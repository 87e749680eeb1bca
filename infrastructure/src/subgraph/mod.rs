//! Graph gateway adapter
//!
//! Implements [`SubgraphPort`](lens_application::SubgraphPort) over HTTPS
//! against The Graph's hosted gateway:
//!
//! ```text
//! POST {gateway_url}/api/{api_key}/subgraphs/id/{subgraph_id}
//! Content-Type: application/json
//!
//! { "query": "..." }
//! ```

mod gateway;

pub use gateway::{DEFAULT_GATEWAY_URL, GatewayConfig, GraphGatewayClient};
