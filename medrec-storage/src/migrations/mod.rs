//! Versioned schema migrations tracked through `PRAGMA user_version`.
//!
//! Each migration module exposes `migrate(&Connection)`. Migrations run
//! in order inside `run_migrations`; the user_version pragma records the
//! last applied step so reopening a database only applies what is new.

use rusqlite::Connection;
use tracing::info;

use medrec_core::errors::{MedrecError, MedrecResult, StorageError};

use crate::to_storage_err;

pub mod v001_accounts;
pub mod v002_reports;
pub mod v003_audit;

type MigrationFn = fn(&Connection) -> MedrecResult<()>;

/// All migrations in apply order.
const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_accounts::migrate),
    (2, v002_reports::migrate),
    (3, v003_audit::migrate),
];

/// Latest schema version.
pub const LATEST_VERSION: u32 = 3;

/// Apply every migration newer than the database's user_version.
pub fn run_migrations(conn: &Connection) -> MedrecResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn).map_err(|e| {
            MedrecError::Storage(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        set_version(conn, *version)?;
        info!(version, "applied schema migration");
    }

    Ok(())
}

/// Read the schema version recorded in the database.
pub fn current_version(conn: &Connection) -> MedrecResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_version(conn: &Connection, version: u32) -> MedrecResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}
