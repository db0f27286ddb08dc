use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terminal front end for drafting objectives and key results
///
/// Opens the "Set Objective" session of the OKR workspace in the terminal. A
/// session can be driven line by line from a script or stdin, or exposed to
/// AI assistants through an MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "okr")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Seed for the suggestion generator, for reproducible runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the OKR CLI
///
/// Without a command the navigation sidebar is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// List the supervisor key results an objective can align with
    #[command(alias = "a")]
    Alignments,
    /// Print the navigation sidebar after a sequence of clicks
    #[command(alias = "n")]
    Nav {
        /// Entry to click, in order; parents toggle open or closed. Use
        /// "Parent > Child" to click a nested entry
        #[arg(long = "select", value_name = "LABEL")]
        select: Vec<String>,
    },
    /// Draft an objective with line commands from a script or stdin
    #[command(alias = "s")]
    Session {
        /// Read commands from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
    },
    /// Send messages to the chat assistant and print the transcript
    #[command(alias = "c")]
    Chat {
        /// Messages to send, one per argument
        #[arg(required = true, value_name = "MESSAGE")]
        messages: Vec<String>,
        /// Milliseconds before each reply arrives
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
    /// Start the MCP server
    Serve,
}
