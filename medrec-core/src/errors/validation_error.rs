use serde::{Deserialize, Serialize};

use crate::models::ReportField;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidReason {
    /// The value could not be parsed into the field's type.
    Type,
    /// The value is not in the field's allowed set.
    Enum,
    /// The value parsed but falls outside the field's bounds.
    Range,
}

impl InvalidReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Enum => "enum",
            Self::Range => "range",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field. Validation reports the first failing field
/// in a fixed order, so one payload yields at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("invalid value for {field}: {reason}")]
pub struct ValidationError {
    pub field: ReportField,
    pub reason: InvalidReason,
}

impl ValidationError {
    pub fn new(field: ReportField, reason: InvalidReason) -> Self {
        Self { field, reason }
    }
}
