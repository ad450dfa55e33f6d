//! Binary flag fields stored as 0/1 integers.

use medrec_core::errors::{InvalidReason, ValidationError};
use medrec_core::models::ReportField;

/// Absent flags default to 0. Present values must parse as an integer
/// (so "1.0" is a type error) and be exactly 0 or 1.
pub fn validate_flag(field: ReportField, raw: Option<&str>) -> Result<i64, ValidationError> {
    let Some(raw) = raw else { return Ok(0) };
    let value: i64 = raw
        .parse()
        .map_err(|_| ValidationError::new(field, InvalidReason::Type))?;
    if !(0..=1).contains(&value) {
        return Err(ValidationError::new(field, InvalidReason::Range));
    }
    Ok(value)
}
