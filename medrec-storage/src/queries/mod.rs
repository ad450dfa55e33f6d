//! SQL query modules. Each module owns the statements for one table
//! family; multi-statement mutations open their own transactions.

pub mod accounts;
pub mod analytics;
pub mod audit_ops;
pub mod report_crud;
pub mod report_query;

/// Helper trait to make `query_row` return `Option` on not-found.
pub(crate) trait OptionalRow<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalRow<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
