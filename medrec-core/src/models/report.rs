//! Health report shapes: the raw payload as a form delivers it, the
//! validated form safe to persist, and the stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SMOKING_STATUS;

/// Gender as self-reported. Absent is a valid state, not a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALLOWED: [&'static str; 3] = ["Male", "Female", "Other"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marital status, reported as Yes/No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Yes,
    No,
}

impl MaritalStatus {
    pub const ALLOWED: [&'static str; 2] = ["Yes", "No"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment category. The wire spellings are fixed by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkType {
    Private,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    #[serde(rename = "Govt_job")]
    GovtJob,
    #[serde(rename = "Never_worked")]
    NeverWorked,
    Children,
}

impl WorkType {
    pub const ALLOWED: [&'static str; 5] = [
        "Private",
        "Self-employed",
        "Govt_job",
        "Never_worked",
        "Children",
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Private" => Some(Self::Private),
            "Self-employed" => Some(Self::SelfEmployed),
            "Govt_job" => Some(Self::GovtJob),
            "Never_worked" => Some(Self::NeverWorked),
            "Children" => Some(Self::Children),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::SelfEmployed => "Self-employed",
            Self::GovtJob => "Govt_job",
            Self::NeverWorked => "Never_worked",
            Self::Children => "Children",
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urban or rural residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidenceType {
    Urban,
    Rural,
}

impl ResidenceType {
    pub const ALLOWED: [&'static str; 2] = ["Urban", "Rural"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Urban" => Some(Self::Urban),
            "Rural" => Some(Self::Rural),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Rural => "Rural",
        }
    }
}

impl std::fmt::Display for ResidenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report field, named by its payload key. Used in validation errors
/// and anywhere a field must be identified to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    Age,
    Gender,
    Hypertension,
    HeartDisease,
    EverMarried,
    WorkType,
    ResidenceType,
    AvgGlucoseLevel,
    Bmi,
    SmokingStatus,
    Stroke,
}

impl ReportField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart_disease",
            Self::EverMarried => "ever_married",
            Self::WorkType => "work_type",
            Self::ResidenceType => "residence_type",
            Self::AvgGlucoseLevel => "avg_glucose_level",
            Self::Bmi => "bmi",
            Self::SmokingStatus => "smoking_status",
            Self::Stroke => "stroke",
        }
    }
}

impl std::fmt::Display for ReportField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw report fields exactly as a form or JSON body delivers them.
/// Every field arrives as text; an absent field and an empty string are
/// equivalent. Coercion and checking happen in the validator, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPayload {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub hypertension: Option<String>,
    pub heart_disease: Option<String>,
    pub ever_married: Option<String>,
    pub work_type: Option<String>,
    pub residence_type: Option<String>,
    pub avg_glucose_level: Option<String>,
    pub bmi: Option<String>,
    pub smoking_status: Option<String>,
    pub stroke: Option<String>,
}

/// A report that has passed every validator check. The only shape the
/// storage layer accepts for writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedReport {
    /// Age in years, 0–120 when present.
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    /// 0 or 1.
    pub hypertension: i64,
    /// 0 or 1.
    pub heart_disease: i64,
    pub ever_married: Option<MaritalStatus>,
    pub work_type: Option<WorkType>,
    pub residence_type: Option<ResidenceType>,
    /// Average glucose level, non-negative when present.
    pub avg_glucose_level: Option<f64>,
    /// Body mass index, strictly positive and at most 80 when present.
    pub bmi: Option<f64>,
    /// Free-form, never empty: absent input becomes "unknown".
    pub smoking_status: String,
    /// 0 or 1.
    pub stroke: i64,
}

impl Default for ValidatedReport {
    fn default() -> Self {
        Self {
            age: None,
            gender: None,
            hypertension: 0,
            heart_disease: 0,
            ever_married: None,
            work_type: None,
            residence_type: None,
            avg_glucose_level: None,
            bmi: None,
            smoking_status: DEFAULT_SMOKING_STATUS.to_string(),
            stroke: 0,
        }
    }
}

/// A stored health report. `id` and `created_at` are assigned by the
/// storage layer on creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// UUID v4 identifier, storage-assigned.
    pub id: String,
    /// Account id of the patient this report belongs to.
    pub owner_id: i64,
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    pub hypertension: i64,
    pub heart_disease: i64,
    pub ever_married: Option<MaritalStatus>,
    pub work_type: Option<WorkType>,
    pub residence_type: Option<ResidenceType>,
    pub avg_glucose_level: Option<f64>,
    pub bmi: Option<f64>,
    pub smoking_status: String,
    pub stroke: i64,
    /// Assigned at creation, immutable.
    pub created_at: DateTime<Utc>,
}

impl HealthReport {
    /// Assemble a stored record from its validated fields.
    pub fn assemble(
        id: String,
        owner_id: i64,
        report: &ValidatedReport,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            age: report.age,
            gender: report.gender,
            hypertension: report.hypertension,
            heart_disease: report.heart_disease,
            ever_married: report.ever_married,
            work_type: report.work_type,
            residence_type: report.residence_type,
            avg_glucose_level: report.avg_glucose_level,
            bmi: report.bmi,
            smoking_status: report.smoking_status.clone(),
            stroke: report.stroke,
            created_at,
        }
    }

    /// View the stored fields as a validated report. Stored records were
    /// validated before the write, so this cannot fail.
    pub fn as_validated(&self) -> ValidatedReport {
        ValidatedReport {
            age: self.age,
            gender: self.gender,
            hypertension: self.hypertension,
            heart_disease: self.heart_disease,
            ever_married: self.ever_married,
            work_type: self.work_type,
            residence_type: self.residence_type,
            avg_glucose_level: self.avg_glucose_level,
            bmi: self.bmi,
            smoking_status: self.smoking_status.clone(),
            stroke: self.stroke,
        }
    }
}

/// Identity equality: two reports are equal if they have the same id.
/// For field comparison, compare via [`HealthReport::as_validated`].
impl PartialEq for HealthReport {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
