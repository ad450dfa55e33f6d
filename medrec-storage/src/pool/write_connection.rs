//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use medrec_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use medrec_core::errors::MedrecResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Owns the one connection allowed to write. WAL mode permits a single
/// writer alongside concurrent readers, so writes queue on this mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> MedrecResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> MedrecResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> MedrecResult<T>
    where
        F: FnOnce(&Connection) -> MedrecResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
