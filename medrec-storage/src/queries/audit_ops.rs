//! Rows of the report_audit_log table.

use rusqlite::{params, Connection};

use medrec_core::errors::MedrecResult;
use medrec_core::models::{AuditActor, AuditEntry, AuditOperation};

use crate::to_storage_err;

/// Insert one audit entry. Callers run this inside the transaction of
/// the mutation it describes, so a failed mutation leaves no entry.
pub fn insert_entry(
    conn: &Connection,
    report_id: &str,
    operation: AuditOperation,
    actor: &AuditActor,
    details: serde_json::Value,
) -> MedrecResult<()> {
    conn.execute(
        "INSERT INTO report_audit_log (report_id, operation, details, actor)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            report_id,
            operation.as_str(),
            details.to_string(),
            actor.to_sql()
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All audit entries for a report, oldest first. Entries remain after
/// the report itself is deleted.
pub fn list_for_report(conn: &Connection, report_id: &str) -> MedrecResult<Vec<AuditEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, report_id, operation, details, actor, timestamp
             FROM report_audit_log WHERE report_id = ?1 ORDER BY id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![report_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter()
        .map(|(id, report_id, op_str, details_str, actor_str, ts_str)| {
            let operation = AuditOperation::parse(&op_str)
                .ok_or_else(|| to_storage_err(format!("unknown audit operation '{op_str}'")))?;
            let details = serde_json::from_str(&details_str)
                .map_err(|e| to_storage_err(format!("parse audit details: {e}")))?;
            let timestamp = chrono::DateTime::parse_from_rfc3339(&ts_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|e| to_storage_err(format!("parse datetime '{ts_str}': {e}")))?;
            Ok(AuditEntry {
                id,
                report_id,
                operation,
                details,
                actor: AuditActor::parse(&actor_str),
                timestamp,
            })
        })
        .collect()
}
