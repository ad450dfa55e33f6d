//! The authorization decision table.

use medrec_core::errors::AccessError;
use medrec_core::models::{AccessScope, Actor, Operation, Role};

/// Role-based policy over report and account operations.
///
/// Checks run in a fixed order: authentication, approval, role, then
/// ownership. The first failing check names the denial, so an
/// unapproved patient hears `NotApproved` rather than `NotOwner`.
///
/// | Role    | Report operations        | Account management |
/// |---------|--------------------------|--------------------|
/// | Patient | own records only         | denied             |
/// | Doctor  | all records              | denied             |
/// | Admin   | denied                   | allowed            |
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGuard;

impl AccessGuard {
    pub fn new() -> Self {
        Self
    }

    /// Decides whether `actor` may perform `operation`.
    ///
    /// `record_owner` is the owning account of the targeted record when
    /// one is known; pass `None` for reads that have not resolved a
    /// record yet. A grant of [`AccessScope::Owner`] binds into queries
    /// as a filter, so restricted callers never fetch rows they would
    /// have to discard.
    pub fn authorize(
        &self,
        actor: Option<&Actor>,
        operation: Operation,
        record_owner: Option<i64>,
    ) -> Result<AccessScope, AccessError> {
        let Some(actor) = actor else {
            return Err(AccessError::NotAuthenticated);
        };
        if !actor.approved {
            return Err(AccessError::NotApproved);
        }

        match (actor.role, operation) {
            // Doctors reach every report.
            (Role::Doctor, op) if op.targets_reports() => Ok(AccessScope::Any),

            // Patients reach their own reports only.
            (Role::Patient, op) if op.targets_reports() => match record_owner {
                Some(owner) if owner != actor.id => Err(AccessError::NotOwner),
                _ => Ok(AccessScope::Owner(actor.id)),
            },

            // Admins manage accounts and nothing else.
            (Role::Admin, Operation::ManageAccounts) => Ok(AccessScope::Any),

            _ => Err(AccessError::RoleForbidden),
        }
    }
}
