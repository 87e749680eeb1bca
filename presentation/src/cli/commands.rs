//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How tool results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered card views
    Card,
    /// Raw tool outcome JSON
    Json,
}

/// CLI arguments for onchain-lens
#[derive(Parser, Debug)]
#[command(name = "onchain-lens")]
#[command(author, version, about = "Query ENS and Nouns DAO data through The Graph")]
#[command(long_about = r#"
onchain-lens exposes three data tools backed by The Graph's indexed
subgraphs and renders their results in the terminal:

  getDomainOwner        ENS name ownership and resolver records
  getNounsProposals     Latest active Nouns DAO proposals
  getNounsProposalById  Full detail for one Nouns DAO proposal

Tools never fail on upstream problems: without an API key, on network
errors or on unexpected data they return clearly marked placeholder data.

The gateway API key is read from GRAPH_API_KEY (or subgraph.api_key).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./lens.toml         Project-level config
3. ~/.config/onchain-lens/config.toml   Global config

Example:
  onchain-lens domain vitalik.eth
  onchain-lens proposals
  onchain-lens proposal 612 -o json
  onchain-lens call getDomainOwner --args '{"domain":"nouns.eth"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file's, then card)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress loading indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up the owner of an ENS name
    Domain {
        /// ENS name, e.g. vitalik.eth
        name: String,
    },
    /// List the latest active Nouns DAO proposals
    Proposals,
    /// Show one Nouns DAO proposal
    Proposal {
        /// Proposal id
        id: String,
    },
    /// Invoke any registered tool by name
    Call {
        /// Tool name, e.g. getDomainOwner
        tool: String,
        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
    },
    /// Print the tool catalogue as JSON Schema
    Tools,
}
