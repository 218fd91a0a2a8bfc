//! shortl MCP server
//!
//! An MCP server exposing URL shortening to agentic clients.
//!
//! # Usage
//!
//! ```bash
//! shortl-mcp [--config <path>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `shortl_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use shortl_core::{Shortener, ShortenerConfig};
use shortl_mcp::ShortlMcpServer;

/// MCP server for shortl
#[derive(Parser)]
#[command(name = "shortl-mcp")]
#[command(about = "MCP server for shortl URL shortening")]
#[command(version)]
struct Args {
    /// Configuration file path (defaults to the user config location)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shortl_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ShortenerConfig::load(args.config.as_deref())?;
    tracing::info!(timeout_secs = config.timeout_secs, "starting shortl-mcp server");

    let server = ShortlMcpServer::new(Shortener::with_config(config)?);
    server.run().await?;

    Ok(())
}
