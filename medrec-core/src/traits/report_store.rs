use crate::errors::MedrecResult;
use crate::models::{
    AccessScope, AuditActor, AuditEntry, HealthReport, ReportAnalytics, SearchFilter,
    ValidatedReport,
};

/// CRUD + scoped access + search + aggregation over health reports.
///
/// Every mutation records an audit entry attributed to `actor`. Scoped
/// variants bind the scope's owner filter into the query itself, so a
/// caller restricted to one owner never touches other rows.
pub trait IReportStore: Send + Sync {
    // --- CRUD ---
    fn create(
        &self,
        owner_id: i64,
        report: &ValidatedReport,
        actor: &AuditActor,
    ) -> MedrecResult<HealthReport>;
    fn get(&self, id: &str) -> MedrecResult<Option<HealthReport>>;
    fn get_scoped(&self, id: &str, scope: &AccessScope) -> MedrecResult<Option<HealthReport>>;
    fn update(
        &self,
        id: &str,
        scope: &AccessScope,
        report: &ValidatedReport,
        actor: &AuditActor,
    ) -> MedrecResult<()>;
    fn delete(&self, id: &str, scope: &AccessScope, actor: &AuditActor) -> MedrecResult<()>;

    // --- Query ---
    fn list_by_owner(&self, owner_id: i64) -> MedrecResult<Vec<HealthReport>>;
    fn search(&self, scope: &AccessScope, filter: &SearchFilter) -> MedrecResult<Vec<HealthReport>>;

    // --- Aggregation ---
    fn analytics(&self) -> MedrecResult<ReportAnalytics>;

    // --- Audit ---
    fn audit_trail(&self, report_id: &str) -> MedrecResult<Vec<AuditEntry>>;
}
