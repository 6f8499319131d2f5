//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::service::InternService;
use crate::store::StoreConnection;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Config { config } => show_config(config.as_deref()),
    }
}

/// Start the HTTP API server.
///
/// The store is connected eagerly; if that fails the server still starts,
/// reports `disconnected` on the health endpoint, and retries on every
/// request.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    init_logging(config.log_format)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))?;

    let connection = StoreConnection::new(config.store.clone());
    if let Err(e) = connection.connect() {
        tracing::warn!(error = %e, "store unavailable at startup, will retry per request");
    }

    let service = Arc::new(InternService::new(connection));
    let server = HttpServer::with_config(config.server.clone(), service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration
pub fn show_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    write_config(&config, &mut io::stdout())
}

fn write_config<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_is_json() {
        let mut buf = Vec::new();
        write_config(&Config::default(), &mut buf).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["server"]["port"], 5000);
        assert_eq!(parsed["store"]["backend"], "memory");
        assert_eq!(parsed["log_format"], "pretty");
    }
}
