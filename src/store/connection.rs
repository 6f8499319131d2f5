//! Store connection lifecycle
//!
//! A [`StoreConnection`] owns the active store handle. It starts
//! disconnected, `connect` opens the configured backend (a no-op when
//! already connected), and `is_ready` reports whether requests can be
//! served right now.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::json_file::JsonFileStore;
use super::memory::MemoryStore;
use super::DocumentStore;

/// Which backend to open
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Process-local store, emptied on every connect
    #[default]
    Memory,
    /// Directory of JSON documents
    JsonDir { path: PathBuf },
}

impl StoreConfig {
    fn open(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        let store: Arc<dyn DocumentStore> = match self {
            StoreConfig::Memory => Arc::new(MemoryStore::new()),
            StoreConfig::JsonDir { path } => Arc::new(JsonFileStore::open(path.clone())?),
        };
        Ok(store)
    }
}

/// Connection state as reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the store handle and its connect/disconnect lifecycle
pub struct StoreConnection {
    config: Option<StoreConfig>,
    store: RwLock<Option<Arc<dyn DocumentStore>>>,
}

impl StoreConnection {
    /// A disconnected handle for `config`
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config: Some(config),
            store: RwLock::new(None),
        }
    }

    /// A handle already connected to `store`.
    ///
    /// There is no config to reopen from, so once disconnected it stays
    /// disconnected.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: None,
            store: RwLock::new(Some(store)),
        }
    }

    pub fn config(&self) -> Option<&StoreConfig> {
        self.config.as_ref()
    }

    /// Open the configured backend unless already connected.
    pub fn connect(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        let mut slot = self.store.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(store) = slot.as_ref() {
            return Ok(Arc::clone(store));
        }

        let config = self.config.as_ref().ok_or(StoreError::NotConnected)?;
        match config.open() {
            Ok(store) => {
                tracing::info!(backend = store.backend(), "store connected");
                *slot = Some(Arc::clone(&store));
                Ok(store)
            }
            Err(e) => {
                tracing::error!(error = %e, "store connection failed");
                Err(e)
            }
        }
    }

    /// Drop the active handle
    pub fn disconnect(&self) {
        if let Ok(mut slot) = self.store.write() {
            if slot.take().is_some() {
                tracing::info!("store disconnected");
            }
        }
    }

    /// The active handle, without attempting to connect
    pub fn store(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        self.store
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .clone()
            .ok_or(StoreError::NotConnected)
    }

    /// True when connected and the store answers a ping
    pub fn is_ready(&self) -> bool {
        self.store().map(|s| s.ping().is_ok()).unwrap_or(false)
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.is_ready() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

impl fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConnection")
            .field("config", &self.config)
            .field("status", &self.status())
            .finish()
    }
}
