//! Configuration file and environment overrides
//!
//! Precedence, lowest first:
//! 1. Built-in defaults
//! 2. JSON config file (`--config`), every field optional
//! 3. Environment: `HOST`, `PORT`, `FRONTEND_URL`,
//!    `INTERN_TRACKER_DATA_DIR`, `INTERN_TRACKER_LOG_FORMAT`
//! 4. `--port` flag (applied by the serve command)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::StoreConfig;

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_FRONTEND_URL: &str = "FRONTEND_URL";
pub const ENV_DATA_DIR: &str = "INTERN_TRACKER_DATA_DIR";
pub const ENV_LOG_FORMAT: &str = "INTERN_TRACKER_LOG_FORMAT";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener and CORS
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Store backend (default: memory)
    #[serde(default)]
    pub store: StoreConfig,

    /// Log output format (default: pretty)
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Effective configuration: file (or defaults), then process environment
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = var(ENV_HOST) {
            self.server.host = host.trim().to_string();
        }

        if let Some(port) = var(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                CliError::config_error(format!("Invalid {}: '{}'", ENV_PORT, port))
            })?;
        }

        if let Some(origin) = var(ENV_FRONTEND_URL) {
            self.server.allow_origin(origin);
        }

        if let Some(dir) = var(ENV_DATA_DIR) {
            self.store = StoreConfig::JsonDir {
                path: PathBuf::from(dir.trim()),
            };
        }

        if let Some(format) = var(ENV_LOG_FORMAT) {
            self.log_format = format.parse().map_err(CliError::Config)?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if let StoreConfig::JsonDir { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err(CliError::config_error("store.path must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tracker.json");
        fs::write(
            &path,
            r#"{"store": {"backend": "json_dir", "path": "/var/lib/interns"}, "log_format": "json"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server, HttpServerConfig::default());
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.store,
            StoreConfig::JsonDir {
                path: PathBuf::from("/var/lib/interns")
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/tracker.json"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tracker.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("PORT", "8081"),
                ("FRONTEND_URL", "https://interns.example.com"),
                ("INTERN_TRACKER_DATA_DIR", "./data/interns"),
                ("INTERN_TRACKER_LOG_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 8081);
        assert!(config
            .server
            .cors_origins
            .contains(&"https://interns.example.com".to_string()));
        assert_eq!(
            config.store,
            StoreConfig::JsonDir {
                path: PathBuf::from("./data/interns")
            }
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_env_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_env_port() {
        let mut config = Config::default();
        let result = config.apply_env(env(&[("PORT", "http")]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
