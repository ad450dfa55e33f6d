//! Actors and the account directory entries they are resolved from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role a caller acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "doctor" => Some(Self::Doctor),
            "patient" => Some(Self::Patient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated party performing an operation, as resolved by the
/// session layer. Approval is checked on every authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
    pub approved: bool,
}

impl Actor {
    pub fn new(id: i64, role: Role, approved: bool) -> Self {
        Self { id, role, approved }
    }
}

/// A directory entry for a user of the system. Credentials are handled
/// by the session layer and never appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The actor this account resolves to.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            role: self.role,
            approved: self.approved,
        }
    }
}

/// Identity equality: two accounts are equal if they have the same id.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Fields supplied at registration. The directory assigns id, approval
/// state, and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}
