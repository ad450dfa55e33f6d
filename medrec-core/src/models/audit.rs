//! Audit trail entries recorded alongside report mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutations that leave an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOperation {
    Create,
    Update,
    Delete,
}

impl AuditOperation {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who performed an audited mutation. Maintenance tasks run as `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditActor {
    System,
    Account(i64),
}

impl AuditActor {
    /// Text form stored in the audit table.
    pub fn to_sql(self) -> String {
        match self {
            Self::System => "system".to_string(),
            Self::Account(id) => id.to_string(),
        }
    }

    /// Inverse of [`to_sql`](Self::to_sql). Unrecognized values fall back
    /// to `System`.
    pub fn parse(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(id) => Self::Account(id),
            Err(_) => Self::System,
        }
    }
}

impl std::fmt::Display for AuditActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Account(id) => write!(f, "{id}"),
        }
    }
}

/// One row of the audit trail. Entries outlive the reports they describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub report_id: String,
    pub operation: AuditOperation,
    pub details: serde_json::Value,
    pub actor: AuditActor,
    pub timestamp: DateTime<Utc>,
}
