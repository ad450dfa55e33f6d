//! v001: accounts.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MedrecResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS accounts (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            username     TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL,
            role         TEXT NOT NULL CHECK (role IN ('admin', 'doctor', 'patient')),
            approved     INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_accounts_role ON accounts(role);
        CREATE INDEX IF NOT EXISTS idx_accounts_approved ON accounts(approved);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
