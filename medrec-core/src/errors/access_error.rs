use serde::{Deserialize, Serialize};

/// Why an operation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessError {
    #[error("authentication required")]
    NotAuthenticated,

    #[error("account is pending approval")]
    NotApproved,

    #[error("record belongs to another patient")]
    NotOwner,

    #[error("role is not permitted to perform this operation")]
    RoleForbidden,
}

impl AccessError {
    /// Stable machine-readable denial code.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::NotApproved => "NOT_APPROVED",
            Self::NotOwner => "NOT_OWNER",
            Self::RoleForbidden => "ROLE_FORBIDDEN",
        }
    }
}
