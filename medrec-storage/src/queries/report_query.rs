//! List and search queries over health reports.

use rusqlite::{params, Connection};

use medrec_core::constants::DEFAULT_SEARCH_LIMIT;
use medrec_core::errors::MedrecResult;
use medrec_core::models::{
    AccessScope, Gender, HealthReport, SearchFilter, WorkType,
};

use super::report_crud::row_to_report;
use crate::to_storage_err;

/// All reports belonging to one owner, newest first. Ties on the
/// creation timestamp fall back to insertion order.
pub fn list_by_owner(conn: &Connection, owner_id: i64) -> MedrecResult<Vec<HealthReport>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, owner_id, age, gender, hypertension, heart_disease,
                    ever_married, work_type, residence_type, avg_glucose_level,
                    bmi, smoking_status, stroke, created_at
             FROM health_reports WHERE owner_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![owner_id], |row| Ok(row_to_report(row)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter().collect()
}

/// Search reports within a scope. Absent filter fields bind as NULL and
/// match everything; the term matches the report id and smoking status
/// as substrings.
pub fn search(
    conn: &Connection,
    scope: &AccessScope,
    filter: &SearchFilter,
) -> MedrecResult<Vec<HealthReport>> {
    let limit = filter.limit.unwrap_or(DEFAULT_SEARCH_LIMIT) as i64;

    let mut stmt = conn
        .prepare(
            "SELECT id, owner_id, age, gender, hypertension, heart_disease,
                    ever_married, work_type, residence_type, avg_glucose_level,
                    bmi, smoking_status, stroke, created_at
             FROM health_reports
             WHERE (?1 IS NULL OR owner_id = ?1)
               AND (?2 IS NULL OR id LIKE '%' || ?2 || '%'
                    OR smoking_status LIKE '%' || ?2 || '%')
               AND (?3 IS NULL OR gender = ?3)
               AND (?4 IS NULL OR work_type = ?4)
               AND (?5 IS NULL OR stroke = ?5)
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?6",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![
                scope.owner_filter(),
                filter.term,
                filter.gender.map(Gender::as_str),
                filter.work_type.map(WorkType::as_str),
                filter.stroke,
                limit,
            ],
            |row| Ok(row_to_report(row)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter().collect()
}
