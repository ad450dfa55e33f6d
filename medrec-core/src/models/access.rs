//! Operations subject to authorization and the scopes they resolve to.

use serde::{Deserialize, Serialize};

/// The operations a caller can be authorized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateReport,
    ReadReport,
    UpdateReport,
    DeleteReport,
    ManageAccounts,
}

impl Operation {
    /// Whether this operation targets health reports rather than
    /// accounts.
    pub fn targets_reports(self) -> bool {
        !matches!(self, Self::ManageAccounts)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateReport => "create_report",
            Self::ReadReport => "read_report",
            Self::UpdateReport => "update_report",
            Self::DeleteReport => "delete_report",
            Self::ManageAccounts => "manage_accounts",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a granted operation reaches. `Owner` scopes every query to a
/// single account so reads filter at the source instead of fetching and
/// discarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// No owner restriction.
    Any,
    /// Restricted to records owned by the given account.
    Owner(i64),
}

impl AccessScope {
    /// Whether a record owned by `owner_id` falls inside this scope.
    pub fn permits(&self, owner_id: i64) -> bool {
        match self {
            Self::Any => true,
            Self::Owner(own) => *own == owner_id,
        }
    }

    /// Owner restriction as a bindable filter. `None` means unrestricted.
    pub fn owner_filter(&self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Owner(own) => Some(*own),
        }
    }
}
