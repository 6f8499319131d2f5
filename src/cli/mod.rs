//! CLI module for the intern tracker
//!
//! Provides command-line interface for:
//! - serve: load configuration, connect the store, run the HTTP API
//! - config: print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, show_config};
pub use config::Config;
pub use errors::{CliError, CliResult};
