//! Numeric fields: parse to f64, then bound-check.

use medrec_core::constants::{AGE_MAX, AGE_MIN, BMI_MAX};
use medrec_core::errors::{InvalidReason, ValidationError};
use medrec_core::models::ReportField;

/// Non-numeric text is a type error. NaN and infinities parse in Rust,
/// so they are rejected here as out of range.
fn parse_numeric(field: ReportField, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::new(field, InvalidReason::Type))?;
    if !value.is_finite() {
        return Err(ValidationError::new(field, InvalidReason::Range));
    }
    Ok(value)
}

/// Age must lie in [0, 120].
pub fn validate_age(raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = raw else { return Ok(None) };
    let value = parse_numeric(ReportField::Age, raw)?;
    if !(AGE_MIN..=AGE_MAX).contains(&value) {
        return Err(ValidationError::new(ReportField::Age, InvalidReason::Range));
    }
    Ok(Some(value))
}

/// Average glucose must be non-negative.
pub fn validate_glucose(raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = raw else { return Ok(None) };
    let value = parse_numeric(ReportField::AvgGlucoseLevel, raw)?;
    if value < 0.0 {
        return Err(ValidationError::new(
            ReportField::AvgGlucoseLevel,
            InvalidReason::Range,
        ));
    }
    Ok(Some(value))
}

/// BMI must lie in (0, 80]: strictly positive, at most 80.
pub fn validate_bmi(raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = raw else { return Ok(None) };
    let value = parse_numeric(ReportField::Bmi, raw)?;
    if value <= 0.0 || value > BMI_MAX {
        return Err(ValidationError::new(ReportField::Bmi, InvalidReason::Range));
    }
    Ok(Some(value))
}
