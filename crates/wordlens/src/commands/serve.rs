//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{debug, info, instrument};
use wordlens_core::config::Config;

use crate::server::WordlensServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve the analysis tools over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    debug!(max_input_bytes = ?max_input_bytes, "executing serve command");

    let server = WordlensServer::new(config.analysis, max_input_bytes);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    info!("MCP server started on stdio");

    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
