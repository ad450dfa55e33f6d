//! # medrec-validation
//!
//! Field-by-field payload validation and weighted risk scoring for
//! health reports.
//!
//! ## Field families
//! 1. **Numeric**: age, glucose, bmi, parsed then bound-checked
//! 2. **Flags**: hypertension, heart_disease, stroke as 0/1 integers
//! 3. **Choice**: gender, marital status, work type, residence
//! 4. **Smoking**: free text, defaulted to "unknown" when absent
//!
//! Validation walks the payload in submission order and reports the
//! first failing field, so a payload yields at most one error.

pub mod engine;
pub mod fields;
pub mod scoring;

pub use engine::ValidationEngine;
pub use scoring::{score, score_breakdown, ScoreBreakdown};
