//! Account lifecycle: registration, approval, listing, removal.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use medrec_core::constants::USERNAME_PATTERN;
use medrec_core::errors::{AccessError, MedrecError, MedrecResult};
use medrec_core::models::{Account, Actor, NewAccount, Operation, Role};
use medrec_core::traits::IAccountDirectory;

use medrec_access::AccessGuard;
use tracing::{info, warn};

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(USERNAME_PATTERN).unwrap());

/// Account operations behind admin authorization.
///
/// Registration is the exception: it is anonymous-facing, with the
/// approval flag standing in for review. Admin accounts are usable
/// immediately; patients and doctors wait for an admin to approve.
pub struct AccountService {
    directory: Arc<dyn IAccountDirectory>,
    guard: AccessGuard,
}

impl AccountService {
    pub fn new(directory: Arc<dyn IAccountDirectory>) -> Self {
        Self {
            directory,
            guard: AccessGuard::new(),
        }
    }

    /// Runs the manage-accounts check and hands back the validated
    /// actor, since removal needs the acting admin's id.
    fn authorize<'a>(&self, actor: Option<&'a Actor>) -> MedrecResult<&'a Actor> {
        self.guard
            .authorize(actor, Operation::ManageAccounts, None)
            .map_err(|denial| {
                warn!(operation = %Operation::ManageAccounts, code = denial.code(), "access denied");
                MedrecError::from(denial)
            })?;
        actor.ok_or_else(|| AccessError::NotAuthenticated.into())
    }

    // --- Registration ---

    /// Registers a new account.
    ///
    /// The username must match [`USERNAME_PATTERN`]; duplicates map to
    /// `UsernameTaken`.
    pub fn register(&self, account: &NewAccount) -> MedrecResult<Account> {
        if !USERNAME_RE.is_match(&account.username) {
            return Err(MedrecError::InvalidUsername {
                username: account.username.clone(),
                reason: "must be 3 to 32 characters of letters, digits, '_', '.' or '-'"
                    .to_string(),
            });
        }
        let approved = account.role == Role::Admin;
        let created = self.directory.create_account(account, approved)?;
        info!(
            account_id = created.id,
            username = %created.username,
            role = %created.role,
            approved,
            "account registered"
        );
        Ok(created)
    }

    // --- Lifecycle ---

    /// Marks a pending account as approved.
    pub fn approve(&self, actor: Option<&Actor>, id: i64) -> MedrecResult<()> {
        self.authorize(actor)?;
        self.directory.approve_account(id)?;
        info!(account_id = id, "account approved");
        Ok(())
    }

    /// Lists every account, newest first.
    pub fn list(&self, actor: Option<&Actor>) -> MedrecResult<Vec<Account>> {
        self.authorize(actor)?;
        self.directory.list_accounts()
    }

    /// Removes an account along with its reports. Admins cannot remove
    /// their own account.
    pub fn remove(&self, actor: Option<&Actor>, id: i64) -> MedrecResult<()> {
        let admin = self.authorize(actor)?;
        if admin.id == id {
            return Err(MedrecError::SelfRemoval { id });
        }
        self.directory.remove_account(id)?;
        info!(account_id = id, "account removed");
        Ok(())
    }

    // --- Resolution ---

    /// Resolves an account id to the actor it acts as. The seam the
    /// session layer calls before entering the report pipeline.
    pub fn find_actor(&self, id: i64) -> MedrecResult<Option<Actor>> {
        Ok(self
            .directory
            .find_account(id)?
            .map(|account| account.actor()))
    }
}
