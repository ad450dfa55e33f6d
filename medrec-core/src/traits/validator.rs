use crate::errors::ValidationError;
use crate::models::{ReportPayload, ValidatedReport};

/// Field-by-field payload validation.
pub trait IReportValidator: Send + Sync {
    /// Validates a raw payload, reporting the first failing field in
    /// submission order.
    fn validate(&self, payload: &ReportPayload) -> Result<ValidatedReport, ValidationError>;
}
