//! OKR CLI Application
//!
//! Command-line front end for drafting an objective and its key results.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, OkrMcpServer};
use okr_core::SessionBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        seed,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(renderer, seed);

    info!("OKR started");

    match command {
        Some(Alignments) => cli.list_alignments(),
        Some(Nav { select }) => cli.show_nav(&select),
        Some(Session { script }) => cli.run_session(script.as_deref()),
        Some(Chat { messages, delay_ms }) => {
            cli.chat(messages, Duration::from_millis(delay_ms)).await
        }
        Some(Serve) => {
            info!("Starting OKR MCP server");
            let session = SessionBuilder::new().with_seed(seed).build();
            run_stdio_server(OkrMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        None => cli.show_nav(&[]),
    }
}
