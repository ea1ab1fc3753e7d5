//! Command line entry points

pub mod serve;

use clap::{Parser, Subcommand};

/// Cuisine Connect assistant - food ordering help over an LLM
#[derive(Parser)]
#[command(name = "cuisine-connect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
