//! Aggregate counts over the report store.

use rusqlite::Connection;

use medrec_core::errors::MedrecResult;
use medrec_core::models::{ReportAnalytics, SmokingGroup};

use crate::to_storage_err;

/// Totals and the stroke-by-smoking-status grouping.
pub fn report_analytics(conn: &Connection) -> MedrecResult<ReportAnalytics> {
    let total_reports = conn
        .query_row("SELECT COUNT(*) FROM health_reports", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))? as u64;

    let stroke_count = conn
        .query_row(
            "SELECT COUNT(*) FROM health_reports WHERE stroke = 1",
            [],
            |row| row.get::<_, i64>(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))? as u64;

    let mut stmt = conn
        .prepare(
            "SELECT smoking_status, COUNT(*) FROM health_reports
             WHERE stroke = 1 GROUP BY smoking_status ORDER BY smoking_status",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let stroke_by_smoking = stmt
        .query_map([], |row| {
            Ok(SmokingGroup {
                status: row.get(0)?,
                count: row.get::<_, i64>(1)? as u64,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ReportAnalytics {
        total_reports,
        stroke_count,
        stroke_by_smoking,
    })
}
