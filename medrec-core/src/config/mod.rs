//! Configuration loaded from TOML with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{MedrecError, MedrecResult};

pub mod defaults;
mod storage_config;

pub use storage_config::StorageConfig;

/// Top-level configuration. Every field has a default, so an empty
/// file (or no file at all) yields a working in-memory setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedrecConfig {
    pub storage: StorageConfig,
    /// Tracing filter directive used when `MEDREC_LOG` is unset.
    pub log_filter: String,
}

impl Default for MedrecConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl MedrecConfig {
    pub fn from_toml(raw: &str) -> MedrecResult<Self> {
        toml::from_str(raw).map_err(|e| MedrecError::Config {
            message: e.to_string(),
        })
    }

    /// Reads a TOML file and applies environment overrides on top.
    pub fn load(path: &Path) -> MedrecResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| MedrecError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let mut config = Self::from_toml(&raw)?;
        config.apply_env();
        Ok(config)
    }

    /// Environment variables take precedence over file values.
    ///
    /// - `MEDREC_DB_PATH` sets the database file path
    /// - `MEDREC_READ_POOL_SIZE` sets the read pool size
    /// - `MEDREC_LOG` sets the fallback tracing filter
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("MEDREC_DB_PATH") {
            if !path.is_empty() {
                self.storage.path = Some(PathBuf::from(path));
            }
        }
        if let Ok(size) = std::env::var("MEDREC_READ_POOL_SIZE") {
            if let Ok(n) = size.parse() {
                self.storage.read_pool_size = n;
            }
        }
        if let Ok(filter) = std::env::var("MEDREC_LOG") {
            if !filter.is_empty() {
                self.log_filter = filter;
            }
        }
    }
}
