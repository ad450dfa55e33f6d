//! Error taxonomy for the medrec workspace.
//!
//! Validation and access errors are recoverable at the caller: the caller
//! re-prompts with the specific field or reason. Storage errors are fatal
//! for the current operation and are surfaced, not retried.

mod access_error;
mod storage_error;
mod validation_error;

pub use access_error::AccessError;
pub use storage_error::StorageError;
pub use validation_error::{InvalidReason, ValidationError};

/// Result alias used across all medrec crates.
pub type MedrecResult<T> = Result<T, MedrecError>;

/// Top-level error type aggregating every failure the system can produce.
#[derive(Debug, thiserror::Error)]
pub enum MedrecError {
    #[error("report {id} not found")]
    ReportNotFound { id: String },

    #[error("account {id} not found")]
    AccountNotFound { id: i64 },

    #[error("username '{username}' is already registered")]
    UsernameTaken { username: String },

    #[error("invalid username '{username}': {reason}")]
    InvalidUsername { username: String, reason: String },

    #[error("administrators cannot remove their own account (id {id})")]
    SelfRemoval { id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}
