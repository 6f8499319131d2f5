//! CLI argument definitions using clap
//!
//! Commands:
//! - intern-tracker serve [--config <path>] [--port <port>]
//! - intern-tracker config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Intern tracker - candidate records with search, filters and pagination
#[derive(Parser, Debug)]
#[command(name = "intern-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
