use crate::errors::MedrecResult;
use crate::models::{Account, NewAccount};

/// Registration, lookup, and lifecycle of accounts.
///
/// The directory enforces username uniqueness and persists the rows;
/// approval policy and self-removal rules live in the service layer.
pub trait IAccountDirectory: Send + Sync {
    // --- Registration ---
    fn create_account(&self, account: &NewAccount, approved: bool) -> MedrecResult<Account>;

    // --- Lookup ---
    fn find_account(&self, id: i64) -> MedrecResult<Option<Account>>;
    fn find_by_username(&self, username: &str) -> MedrecResult<Option<Account>>;
    fn list_accounts(&self) -> MedrecResult<Vec<Account>>;

    // --- Lifecycle ---
    fn approve_account(&self, id: i64) -> MedrecResult<()>;
    fn remove_account(&self, id: i64) -> MedrecResult<()>;
}
