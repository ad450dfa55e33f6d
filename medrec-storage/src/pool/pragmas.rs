//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 256MB mmap, 64MB cache, configurable
//! busy_timeout, foreign_keys ON, incremental auto_vacuum.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;

use crate::to_storage_err;

/// Apply all performance and safety pragmas to a write connection.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u64) -> MedrecResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA mmap_size = 268435456;
        PRAGMA cache_size = -64000;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        PRAGMA auto_vacuum = INCREMENTAL;
        ",
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas for read connections. The journal mode belongs to the
/// writer; readers only tune their caches and timeouts.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u64) -> MedrecResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA cache_size = -64000;
        PRAGMA mmap_size = 268435456;
        ",
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> MedrecResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
