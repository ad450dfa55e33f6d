//! The report pipeline: authorize, validate, persist.

use std::sync::Arc;

use medrec_core::errors::{AccessError, MedrecError, MedrecResult};
use medrec_core::models::{
    AccessScope, Actor, AuditActor, HealthReport, Operation, ReportAnalytics, ReportPayload,
    ScorePoint, SearchFilter,
};
use medrec_core::traits::IReportStore;

use medrec_access::AccessGuard;
use medrec_validation::{score, ValidationEngine};
use tracing::{info, warn};

/// Report operations behind authorization and validation.
///
/// Every entry point authorizes first, then validates, then touches
/// storage. Reads run under the scope the guard granted, so a caller
/// restricted to one owner queries only that owner's rows.
pub struct ReportService {
    store: Arc<dyn IReportStore>,
    validator: ValidationEngine,
    guard: AccessGuard,
}

impl ReportService {
    pub fn new(store: Arc<dyn IReportStore>) -> Self {
        Self {
            store,
            validator: ValidationEngine::new(),
            guard: AccessGuard::new(),
        }
    }

    fn authorize(
        &self,
        actor: Option<&Actor>,
        operation: Operation,
        record_owner: Option<i64>,
    ) -> MedrecResult<AccessScope> {
        self.guard
            .authorize(actor, operation, record_owner)
            .map_err(|denial| {
                warn!(operation = %operation, code = denial.code(), "access denied");
                MedrecError::from(denial)
            })
    }

    /// Authorization for mutations of an existing report. The caller's
    /// standing is checked before the row is resolved, so anonymous and
    /// unapproved callers never learn whether an id exists.
    fn authorize_mutation(
        &self,
        actor: Option<&Actor>,
        operation: Operation,
        id: &str,
    ) -> MedrecResult<AccessScope> {
        self.authorize(actor, operation, None)?;
        let report = self
            .store
            .get(id)?
            .ok_or_else(|| MedrecError::ReportNotFound { id: id.to_string() })?;
        self.authorize(actor, operation, Some(report.owner_id))
    }

    fn audit_actor(actor: Option<&Actor>) -> AuditActor {
        actor
            .map(|a| AuditActor::Account(a.id))
            .unwrap_or(AuditActor::System)
    }

    // --- Submission ---

    /// Validates and stores a new report owned by `owner_id`.
    ///
    /// Patients may only submit under their own account; doctors may
    /// file for any patient. A validation failure names the first
    /// offending field and nothing is persisted.
    pub fn submit(
        &self,
        actor: Option<&Actor>,
        owner_id: i64,
        payload: &ReportPayload,
    ) -> MedrecResult<HealthReport> {
        self.authorize(actor, Operation::CreateReport, Some(owner_id))?;
        let validated = self.validator.validate_payload(payload)?;
        let stored = self
            .store
            .create(owner_id, &validated, &Self::audit_actor(actor))?;
        info!(report_id = %stored.id, owner_id, "report submitted");
        Ok(stored)
    }

    // --- Retrieval ---

    /// Fetches one report by id under the caller's scope.
    ///
    /// A patient asking for another patient's id gets `ReportNotFound`,
    /// the same answer as for an id that does not exist.
    pub fn fetch(&self, actor: Option<&Actor>, id: &str) -> MedrecResult<HealthReport> {
        let scope = self.authorize(actor, Operation::ReadReport, None)?;
        self.store
            .get_scoped(id, &scope)?
            .ok_or_else(|| MedrecError::ReportNotFound { id: id.to_string() })
    }

    /// Lists reports owned by `owner_id`, newest first.
    pub fn list_for(
        &self,
        actor: Option<&Actor>,
        owner_id: i64,
    ) -> MedrecResult<Vec<HealthReport>> {
        self.authorize(actor, Operation::ReadReport, Some(owner_id))?;
        self.store.list_by_owner(owner_id)
    }

    // --- Mutation ---

    /// Revalidates `payload` and replaces the report's clinical fields.
    /// The owner and creation time are preserved.
    pub fn revise(
        &self,
        actor: Option<&Actor>,
        id: &str,
        payload: &ReportPayload,
    ) -> MedrecResult<HealthReport> {
        let scope = self.authorize_mutation(actor, Operation::UpdateReport, id)?;
        let validated = self.validator.validate_payload(payload)?;
        self.store
            .update(id, &scope, &validated, &Self::audit_actor(actor))?;
        let updated = self
            .store
            .get(id)?
            .ok_or_else(|| MedrecError::ReportNotFound { id: id.to_string() })?;
        info!(report_id = %id, "report revised");
        Ok(updated)
    }

    /// Deletes a report. The audit entries for its lifetime outlive
    /// the row itself.
    pub fn discard(&self, actor: Option<&Actor>, id: &str) -> MedrecResult<()> {
        let scope = self.authorize_mutation(actor, Operation::DeleteReport, id)?;
        self.store.delete(id, &scope, &Self::audit_actor(actor))?;
        info!(report_id = %id, "report discarded");
        Ok(())
    }

    // --- Query ---

    /// Searches reports matching `filter` under the caller's scope.
    pub fn search(
        &self,
        actor: Option<&Actor>,
        filter: &SearchFilter,
    ) -> MedrecResult<Vec<HealthReport>> {
        let scope = self.authorize(actor, Operation::ReadReport, None)?;
        self.store.search(&scope, filter)
    }

    /// Aggregate stroke statistics over every stored report. Requires
    /// an unrestricted read scope, so only doctors qualify.
    pub fn analytics(&self, actor: Option<&Actor>) -> MedrecResult<ReportAnalytics> {
        let scope = self.authorize(actor, Operation::ReadReport, None)?;
        if !matches!(scope, AccessScope::Any) {
            warn!(code = AccessError::RoleForbidden.code(), "analytics denied");
            return Err(AccessError::RoleForbidden.into());
        }
        self.store.analytics()
    }

    // --- Risk ---

    /// Risk scores for one patient's reports, ordered oldest first and
    /// rounded to one decimal, the form the dashboard chart consumes.
    pub fn risk_series(
        &self,
        actor: Option<&Actor>,
        owner_id: i64,
    ) -> MedrecResult<Vec<ScorePoint>> {
        self.authorize(actor, Operation::ReadReport, Some(owner_id))?;
        let mut reports = self.store.list_by_owner(owner_id)?;
        reports.reverse();
        Ok(reports
            .iter()
            .map(|report| ScorePoint {
                report_id: report.id.clone(),
                recorded_at: report.created_at,
                score: score(&report.as_validated()).rounded(),
            })
            .collect())
    }
}
