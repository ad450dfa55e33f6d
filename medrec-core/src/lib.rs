//! # medrec-core
//!
//! Foundation crate for the medrec health-report system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MedrecConfig;
pub use errors::{AccessError, MedrecError, MedrecResult, ValidationError};
pub use models::{
    AccessScope, Account, Actor, HealthReport, Operation, ReportPayload, RiskScore, Role,
    ValidatedReport,
};
