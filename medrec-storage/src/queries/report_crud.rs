//! Insert, update, get, delete for health reports.
//!
//! Mutations are wrapped in a transaction so the report row and its
//! audit entry are all-or-nothing. Scoped variants bind the scope's
//! owner filter directly into the statement: a `NULL` filter matches
//! every row, a concrete one restricts the statement to that owner.

use rusqlite::{params, Connection};

use medrec_core::errors::{MedrecError, MedrecResult};
use medrec_core::models::{
    AccessScope, AuditActor, AuditOperation, Gender, HealthReport, MaritalStatus, ResidenceType,
    ValidatedReport, WorkType,
};

use super::{audit_ops, OptionalRow};
use crate::to_storage_err;

/// Insert a single report with its audit entry.
pub fn insert_report(
    conn: &Connection,
    report: &HealthReport,
    actor: &AuditActor,
) -> MedrecResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_report begin: {e}")))?;

    match insert_report_inner(&tx, report, actor) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("insert_report commit: {e}")))?;
            tracing::debug!(report_id = %report.id, owner_id = report.owner_id, "report inserted");
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Inner insert logic, operating on the provided connection (or transaction via Deref).
fn insert_report_inner(
    conn: &Connection,
    report: &HealthReport,
    actor: &AuditActor,
) -> MedrecResult<()> {
    conn.execute(
        "INSERT INTO health_reports (
            id, owner_id, age, gender, hypertension, heart_disease,
            ever_married, work_type, residence_type, avg_glucose_level,
            bmi, smoking_status, stroke, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            report.id,
            report.owner_id,
            report.age,
            report.gender.map(Gender::as_str),
            report.hypertension,
            report.heart_disease,
            report.ever_married.map(MaritalStatus::as_str),
            report.work_type.map(WorkType::as_str),
            report.residence_type.map(ResidenceType::as_str),
            report.avg_glucose_level,
            report.bmi,
            report.smoking_status,
            report.stroke,
            report.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    audit_ops::insert_entry(
        conn,
        &report.id,
        AuditOperation::Create,
        actor,
        serde_json::json!({ "owner_id": report.owner_id }),
    )?;

    Ok(())
}

/// Get a single report by id, unrestricted.
pub fn get_report(conn: &Connection, id: &str) -> MedrecResult<Option<HealthReport>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, owner_id, age, gender, hypertension, heart_disease,
                    ever_married, work_type, residence_type, avg_glucose_level,
                    bmi, smoking_status, stroke, created_at
             FROM health_reports WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    stmt.query_row(params![id], |row| Ok(row_to_report(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .transpose()
}

/// Get a single report by id within a scope. A report outside the scope
/// is indistinguishable from a missing one.
pub fn get_report_scoped(
    conn: &Connection,
    id: &str,
    scope: &AccessScope,
) -> MedrecResult<Option<HealthReport>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, owner_id, age, gender, hypertension, heart_disease,
                    ever_married, work_type, residence_type, avg_glucose_level,
                    bmi, smoking_status, stroke, created_at
             FROM health_reports WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    stmt.query_row(params![id, scope.owner_filter()], |row| {
        Ok(row_to_report(row))
    })
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))?
    .transpose()
}

/// Update the medical fields of an existing report within a scope.
/// The id, owner, and creation time never change.
pub fn update_report(
    conn: &Connection,
    id: &str,
    scope: &AccessScope,
    report: &ValidatedReport,
    actor: &AuditActor,
) -> MedrecResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("update_report begin: {e}")))?;

    match update_report_inner(&tx, id, scope, report, actor) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("update_report commit: {e}")))?;
            tracing::debug!(report_id = %id, "report updated");
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Inner update logic, operating on the provided connection (or transaction via Deref).
fn update_report_inner(
    conn: &Connection,
    id: &str,
    scope: &AccessScope,
    report: &ValidatedReport,
    actor: &AuditActor,
) -> MedrecResult<()> {
    let rows = conn
        .execute(
            "UPDATE health_reports SET
                age = ?3, gender = ?4, hypertension = ?5, heart_disease = ?6,
                ever_married = ?7, work_type = ?8, residence_type = ?9,
                avg_glucose_level = ?10, bmi = ?11, smoking_status = ?12,
                stroke = ?13
             WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)",
            params![
                id,
                scope.owner_filter(),
                report.age,
                report.gender.map(Gender::as_str),
                report.hypertension,
                report.heart_disease,
                report.ever_married.map(MaritalStatus::as_str),
                report.work_type.map(WorkType::as_str),
                report.residence_type.map(ResidenceType::as_str),
                report.avg_glucose_level,
                report.bmi,
                report.smoking_status,
                report.stroke,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if rows == 0 {
        return Err(MedrecError::ReportNotFound { id: id.to_string() });
    }

    audit_ops::insert_entry(conn, id, AuditOperation::Update, actor, serde_json::json!({}))?;

    Ok(())
}

/// Delete a report by id within a scope.
pub fn delete_report(
    conn: &Connection,
    id: &str,
    scope: &AccessScope,
    actor: &AuditActor,
) -> MedrecResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("delete_report begin: {e}")))?;

    match delete_report_inner(&tx, id, scope, actor) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("delete_report commit: {e}")))?;
            tracing::debug!(report_id = %id, "report deleted");
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Inner delete logic, operating on the provided connection (or transaction via Deref).
/// The audit entry is written only when a row was actually removed.
fn delete_report_inner(
    conn: &Connection,
    id: &str,
    scope: &AccessScope,
    actor: &AuditActor,
) -> MedrecResult<()> {
    let rows = conn
        .execute(
            "DELETE FROM health_reports WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)",
            params![id, scope.owner_filter()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if rows == 0 {
        return Err(MedrecError::ReportNotFound { id: id.to_string() });
    }

    audit_ops::insert_entry(conn, id, AuditOperation::Delete, actor, serde_json::json!({}))?;

    Ok(())
}

/// Parse a row from the health_reports table into a HealthReport.
pub(crate) fn row_to_report(row: &rusqlite::Row<'_>) -> MedrecResult<HealthReport> {
    let gender_str: Option<String> = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let married_str: Option<String> = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let work_str: Option<String> = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;
    let residence_str: Option<String> = row.get(8).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at_str: String = row.get(13).map_err(|e| to_storage_err(e.to_string()))?;

    let gender = gender_str
        .as_deref()
        .map(|s| Gender::parse(s).ok_or_else(|| to_storage_err(format!("unknown gender '{s}'"))))
        .transpose()?;
    let ever_married = married_str
        .as_deref()
        .map(|s| {
            MaritalStatus::parse(s)
                .ok_or_else(|| to_storage_err(format!("unknown ever_married '{s}'")))
        })
        .transpose()?;
    let work_type = work_str
        .as_deref()
        .map(|s| {
            WorkType::parse(s).ok_or_else(|| to_storage_err(format!("unknown work_type '{s}'")))
        })
        .transpose()?;
    let residence_type = residence_str
        .as_deref()
        .map(|s| {
            ResidenceType::parse(s)
                .ok_or_else(|| to_storage_err(format!("unknown residence_type '{s}'")))
        })
        .transpose()?;

    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{created_at_str}': {e}")))?;

    Ok(HealthReport {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        owner_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        age: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        gender,
        hypertension: row.get(4).map_err(|e| to_storage_err(e.to_string()))?,
        heart_disease: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        ever_married,
        work_type,
        residence_type,
        avg_glucose_level: row.get(9).map_err(|e| to_storage_err(e.to_string()))?,
        bmi: row.get(10).map_err(|e| to_storage_err(e.to_string()))?,
        smoking_status: row.get(11).map_err(|e| to_storage_err(e.to_string()))?,
        stroke: row.get(12).map_err(|e| to_storage_err(e.to_string()))?,
        created_at,
    })
}
