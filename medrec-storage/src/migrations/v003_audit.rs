//! v003: report_audit_log.
//!
//! No foreign key on report_id: audit entries must survive the deletion
//! of the report they describe.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MedrecResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS report_audit_log (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id   TEXT NOT NULL,
            operation   TEXT NOT NULL,
            details     TEXT NOT NULL DEFAULT '{}',
            actor       TEXT NOT NULL DEFAULT 'system',
            timestamp   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_audit_report ON report_audit_log(report_id);
        CREATE INDEX IF NOT EXISTS idx_audit_operation ON report_audit_log(operation);
        CREATE INDEX IF NOT EXISTS idx_audit_timestamp ON report_audit_log(timestamp);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
