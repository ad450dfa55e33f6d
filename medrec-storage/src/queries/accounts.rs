//! Account registration, lookup, and lifecycle statements.

use rusqlite::{params, Connection};

use medrec_core::errors::{MedrecError, MedrecResult};
use medrec_core::models::{Account, NewAccount, Role};

use super::OptionalRow;
use crate::to_storage_err;

/// Insert a new account and return the stored row. A username collision
/// surfaces as the typed UsernameTaken error rather than a raw SQLite
/// constraint failure.
pub fn insert_account(
    conn: &Connection,
    account: &NewAccount,
    approved: bool,
) -> MedrecResult<Account> {
    let result = conn.execute(
        "INSERT INTO accounts (username, display_name, role, approved)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            account.username,
            account.display_name,
            account.role.as_str(),
            approved as i64
        ],
    );

    match result {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(err, Some(message)))
            if err.code == rusqlite::ErrorCode::ConstraintViolation
                && message.contains("accounts.username") =>
        {
            return Err(MedrecError::UsernameTaken {
                username: account.username.clone(),
            });
        }
        Err(e) => return Err(to_storage_err(e.to_string())),
    }

    let id = conn.last_insert_rowid();
    find_account(conn, id)?
        .ok_or_else(|| to_storage_err(format!("inserted account {id} not found")))
}

/// Get an account by id.
pub fn find_account(conn: &Connection, id: i64) -> MedrecResult<Option<Account>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, username, display_name, role, approved, created_at
             FROM accounts WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    stmt.query_row(params![id], |row| Ok(row_to_account(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .transpose()
}

/// Get an account by its unique username.
pub fn find_by_username(conn: &Connection, username: &str) -> MedrecResult<Option<Account>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, username, display_name, role, approved, created_at
             FROM accounts WHERE username = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    stmt.query_row(params![username], |row| Ok(row_to_account(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .transpose()
}

/// All accounts, newest first.
pub fn list_accounts(conn: &Connection) -> MedrecResult<Vec<Account>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, username, display_name, role, approved, created_at
             FROM accounts ORDER BY created_at DESC, id DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok(row_to_account(row)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter().collect()
}

/// Mark an account approved.
pub fn approve_account(conn: &Connection, id: i64) -> MedrecResult<()> {
    let rows = conn
        .execute("UPDATE accounts SET approved = 1 WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(MedrecError::AccountNotFound { id });
    }
    Ok(())
}

/// Remove an account. The foreign key cascades to the account's reports.
pub fn delete_account(conn: &Connection, id: i64) -> MedrecResult<()> {
    let rows = conn
        .execute("DELETE FROM accounts WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(MedrecError::AccountNotFound { id });
    }
    Ok(())
}

/// Parse a row from the accounts table into an Account.
fn row_to_account(row: &rusqlite::Row<'_>) -> MedrecResult<Account> {
    let role_str: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let created_at_str: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;

    let role = Role::parse(&role_str)
        .ok_or_else(|| to_storage_err(format!("unknown role '{role_str}'")))?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| to_storage_err(format!("parse datetime '{created_at_str}': {e}")))?;

    Ok(Account {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        username: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        display_name: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        role,
        approved: row
            .get::<_, i64>(4)
            .map_err(|e| to_storage_err(e.to_string()))?
            != 0,
        created_at,
    })
}
