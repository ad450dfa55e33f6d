//! Search filters and aggregate views over the report store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::report::{Gender, WorkType};

/// Criteria for searching reports. All fields are optional and combine
/// with AND; an empty filter matches everything in scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Substring match against the report id and smoking status.
    pub term: Option<String>,
    pub gender: Option<Gender>,
    pub work_type: Option<WorkType>,
    /// Restrict to reports with the given stroke flag.
    pub stroke: Option<i64>,
    /// Result cap. Falls back to the default search limit when absent.
    pub limit: Option<usize>,
}

/// Aggregate counts over every stored report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAnalytics {
    pub total_reports: u64,
    pub stroke_count: u64,
    /// Stroke-positive reports grouped by smoking status.
    pub stroke_by_smoking: Vec<SmokingGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokingGroup {
    pub status: String,
    pub count: u64,
}

/// One point in a per-patient risk series, ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub report_id: String,
    pub recorded_at: DateTime<Utc>,
    pub score: f64,
}
