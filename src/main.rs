//! Webex MCP server entry point.
//!
//! Loads `.env` and environment configuration, applies command-line
//! overrides, initializes logging and serves the selected tool set on the
//! configured transport.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use webex_mcp_server::core::{Config, McpServer, TransportService};
use webex_mcp_server::domains::tools::must_initialize_default_client;

#[derive(Parser, Debug)]
#[command(name = "webex-mcp-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server exposing the Webex messaging API as tools")]
struct Cli {
    /// Load the advanced tool group as well. `MCP_ALL_TOOLS=true` does the same.
    #[arg(long)]
    all_tools: bool,

    /// Read environment variables from this file instead of ./.env.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Config::load_dotenv(cli.env_file.as_deref())?;

    let mut config = Config::from_env();
    if cli.all_tools {
        config.tools.all_tools = true;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // stdout belongs to the protocol in stdio mode
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config
        .webex
        .validate()
        .context("Webex credentials are required")?;

    // The blocking HTTP client must not be built on a runtime thread.
    tokio::task::spawn_blocking(must_initialize_default_client)
        .await
        .context("failed to initialize the Webex client")?;

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::from_config(config).context("failed to load tools")?;

    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
