//! Categorical fields with fixed allowed sets. Spellings are
//! case-sensitive and match the stored wire forms exactly.

use medrec_core::constants::DEFAULT_SMOKING_STATUS;
use medrec_core::errors::{InvalidReason, ValidationError};
use medrec_core::models::{Gender, MaritalStatus, ReportField, ResidenceType, WorkType};

pub fn validate_gender(raw: Option<&str>) -> Result<Option<Gender>, ValidationError> {
    raw.map(|value| {
        Gender::parse(value)
            .ok_or_else(|| ValidationError::new(ReportField::Gender, InvalidReason::Enum))
    })
    .transpose()
}

pub fn validate_marital(raw: Option<&str>) -> Result<Option<MaritalStatus>, ValidationError> {
    raw.map(|value| {
        MaritalStatus::parse(value)
            .ok_or_else(|| ValidationError::new(ReportField::EverMarried, InvalidReason::Enum))
    })
    .transpose()
}

pub fn validate_work_type(raw: Option<&str>) -> Result<Option<WorkType>, ValidationError> {
    raw.map(|value| {
        WorkType::parse(value)
            .ok_or_else(|| ValidationError::new(ReportField::WorkType, InvalidReason::Enum))
    })
    .transpose()
}

pub fn validate_residence(raw: Option<&str>) -> Result<Option<ResidenceType>, ValidationError> {
    raw.map(|value| {
        ResidenceType::parse(value)
            .ok_or_else(|| ValidationError::new(ReportField::ResidenceType, InvalidReason::Enum))
    })
    .transpose()
}

/// Smoking status accepts any text and never fails; absent values
/// become "unknown".
pub fn normalize_smoking(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_SMOKING_STATUS).to_string()
}
