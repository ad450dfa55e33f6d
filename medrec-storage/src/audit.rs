//! Audit trail reads. Entries are written by the mutation statements
//! themselves so they share the mutation's transaction; this module only
//! exposes the read side.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;
use medrec_core::models::AuditEntry;

use crate::queries::audit_ops;

/// Full audit trail for one report, oldest entry first. Entries are kept
/// after the report itself is deleted.
pub fn trail_for_report(conn: &Connection, report_id: &str) -> MedrecResult<Vec<AuditEntry>> {
    audit_ops::list_for_report(conn, report_id)
}
