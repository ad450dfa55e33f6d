use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. `None` selects an in-memory database.
    pub path: Option<PathBuf>,
    /// Number of read-only connections kept for concurrent reads.
    pub read_pool_size: usize,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
