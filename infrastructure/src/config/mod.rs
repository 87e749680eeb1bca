//! Configuration file loading for onchain-lens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `GRAPH_API_KEY`, `ONCHAIN_LENS_SUBGRAPH__<FIELD>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./lens.toml` or `./.lens.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/onchain-lens/config.toml`
//!    (fallback `~/.config/onchain-lens/config.toml`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileSubgraphConfig, Severity,
};
pub use loader::{API_KEY_ENV, ConfigLoader, ENV_PREFIX};
