//! # medrec-storage
//!
//! SQLite persistence for health reports and accounts.
//!
//! - Single write connection + round-robin read pool, WAL mode
//! - Versioned migrations tracked through `PRAGMA user_version`
//! - Audit log written in the same transaction as each report mutation
//! - DashMap document mirror holding reports as JSON for flexible reads

pub mod audit;
pub mod document;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use document::DocumentStore;
pub use engine::StorageEngine;
pub use pool::ConnectionPool;

use medrec_core::errors::{MedrecError, StorageError};

/// Wrap a low-level SQLite failure message into the storage error type.
pub fn to_storage_err(message: String) -> MedrecError {
    MedrecError::Storage(StorageError::SqliteError { message })
}
