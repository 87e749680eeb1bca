//! CLI entrypoint for onchain-lens
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use lens_application::ports::tool_executor::ToolExecutorPort;
use lens_application::ports::tool_schema::ToolSchemaPort;
use lens_domain::{GET_DOMAIN_OWNER, GET_NOUNS_PROPOSAL_BY_ID, GET_NOUNS_PROPOSALS, ToolCall};
use lens_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, GraphGatewayClient, JsonSchemaToolConverter,
    Severity, ToolRegistry, default_toolset,
};
use lens_presentation::{
    Cli, Command, ConsoleFormatter, LoadingIndicator, OutputFormat, RendererBinding,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status for a rejected tool invocation
const EXIT_CONTRACT_VIOLATION: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Card => OutputFormat::Card,
        FileOutputFormat::Json => OutputFormat::Json,
    });

    // === Dependency Injection ===
    let gateway = GraphGatewayClient::new(config.subgraph.to_gateway_config())?;
    if !gateway.has_credential() {
        info!("No Graph API key configured; tools will return sample data");
    }
    let registry = default_toolset(Arc::new(gateway));
    let binding = RendererBinding::standard();

    let call = match cli.command {
        Some(Command::Domain { name }) => {
            ToolCall::new(GET_DOMAIN_OWNER).with_arg("domain", name)
        }
        Some(Command::Proposals) => ToolCall::new(GET_NOUNS_PROPOSALS),
        Some(Command::Proposal { id }) => {
            ToolCall::new(GET_NOUNS_PROPOSAL_BY_ID).with_arg("id", id)
        }
        Some(Command::Call { tool, args }) => parse_call(tool, args.as_deref())?,
        Some(Command::Tools) => {
            let schemas = JsonSchemaToolConverter.all_tools_schema(registry.tool_spec());
            println!("{}", ConsoleFormatter::format_schemas(&schemas));
            return Ok(());
        }
        None => bail!("No command given. Run with --help to see the available commands."),
    };

    run_call(&registry, &binding, &call, format, cli.quiet).await;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    for issue in config.validate() {
        if issue.severity == Severity::Warning {
            warn!("{}", issue.error);
        }
    }
    config
        .check()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    Ok(config)
}

fn parse_call(tool: String, args: Option<&str>) -> Result<ToolCall> {
    let args = match args {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| anyhow!("--args is not valid JSON: {}", e))?,
        None => serde_json::Value::Null,
    };

    ToolCall::from_json_args(tool, args)
        .map_err(|other| anyhow!("--args must be a JSON object, got {}", other))
}

async fn run_call(
    registry: &ToolRegistry,
    binding: &RendererBinding,
    call: &ToolCall,
    format: OutputFormat,
    quiet: bool,
) {
    let message = binding
        .render_loading(&call.tool_name, &call.arguments)
        .unwrap_or_else(|| format!("Calling {}...", call.tool_name));
    let indicator = LoadingIndicator::start(message, quiet || format == OutputFormat::Json);

    let result = registry.execute(call).await;
    indicator.finish();

    match result {
        Ok(outcome) => {
            let output = match format {
                OutputFormat::Card => {
                    ConsoleFormatter::format_card(binding, &call.tool_name, &outcome)
                }
                OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
            };
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            std::process::exit(EXIT_CONTRACT_VIOLATION);
        }
    }
}
