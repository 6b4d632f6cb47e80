// ABOUTME: Entry point for the SerpApi MCP server binary.
// ABOUTME: Loads configuration, registers both search tools, and serves MCP on stdio.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use serpapi_mcp::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let client = SerpApiClient::new(&config).context("Failed to create HTTP client")?;

    let registry = Registry::new();
    register_search_tools(&registry, &config, Arc::new(client)).await;

    let tools = registry.list().await;
    tracing::info!(
        tools = ?tools,
        base_url = %config.base_url,
        "Starting SerpApi MCP server on stdio"
    );

    serve_stdio(Arc::new(McpServer::new(registry)))
        .await
        .context("MCP server failed")?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
