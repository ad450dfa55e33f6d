//! Domain models shared across the workspace.

pub mod access;
pub mod actor;
pub mod analytics;
pub mod audit;
pub mod report;
pub mod risk;

pub use access::{AccessScope, Operation};
pub use actor::{Account, Actor, NewAccount, Role};
pub use analytics::{ReportAnalytics, ScorePoint, SearchFilter, SmokingGroup};
pub use audit::{AuditActor, AuditEntry, AuditOperation};
pub use report::{
    Gender, HealthReport, MaritalStatus, ReportField, ReportPayload, ResidenceType,
    ValidatedReport, WorkType,
};
pub use risk::{RiskBand, RiskScore};
