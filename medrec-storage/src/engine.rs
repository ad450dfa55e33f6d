//! StorageEngine: owns the ConnectionPool, implements IReportStore and
//! IAccountDirectory, runs startup pragmas and migrations.

use std::path::Path;

use chrono::Utc;

use medrec_core::config::StorageConfig;
use medrec_core::errors::MedrecResult;
use medrec_core::models::{
    AccessScope, Account, AuditActor, AuditEntry, HealthReport, NewAccount, ReportAnalytics,
    SearchFilter, ValidatedReport,
};
use medrec_core::traits::{IAccountDirectory, IReportStore};

use crate::document::DocumentStore;
use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and the document
/// mirror and provides the full IReportStore + IAccountDirectory
/// interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    documents: DocumentStore,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default pool
    /// and timeout settings.
    pub fn open(path: &Path) -> MedrecResult<Self> {
        let config = StorageConfig {
            path: Some(path.to_path_buf()),
            ..StorageConfig::default()
        };
        Self::with_config(&config)
    }

    /// Open an in-memory storage engine (for testing).
    /// Routes all reads through the writer since in-memory read pool
    /// connections are isolated databases that can't see writer's changes.
    pub fn open_in_memory() -> MedrecResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            documents: DocumentStore::new(),
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open according to a storage config: file-backed when a path is set,
    /// in-memory otherwise.
    pub fn with_config(config: &StorageConfig) -> MedrecResult<Self> {
        let Some(path) = &config.path else {
            return Self::open_in_memory();
        };
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self {
            pool,
            documents: DocumentStore::new(),
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the write connection.
    fn initialize(&self) -> MedrecResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// The in-process JSON mirror of stored reports.
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> MedrecResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> MedrecResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }

    /// Replace the mirror snapshot for a report. Mirror failures never
    /// fail the SQLite write that already committed; they are logged and
    /// the mirror entry is dropped so no stale snapshot survives.
    fn refresh_mirror(&self, report: &HealthReport) {
        if let Err(e) = self.documents.upsert(report) {
            tracing::warn!(report_id = %report.id, error = %e, "document mirror upsert failed");
            self.documents.remove(&report.id);
        }
    }
}

impl IReportStore for StorageEngine {
    fn create(
        &self,
        owner_id: i64,
        report: &ValidatedReport,
        actor: &AuditActor,
    ) -> MedrecResult<HealthReport> {
        let stored = HealthReport::assemble(
            uuid::Uuid::new_v4().to_string(),
            owner_id,
            report,
            Utc::now(),
        );
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::report_crud::insert_report(conn, &stored, actor))?;
        self.refresh_mirror(&stored);
        Ok(stored)
    }

    fn get(&self, id: &str) -> MedrecResult<Option<HealthReport>> {
        self.with_reader(|conn| crate::queries::report_crud::get_report(conn, id))
    }

    fn get_scoped(&self, id: &str, scope: &AccessScope) -> MedrecResult<Option<HealthReport>> {
        self.with_reader(|conn| crate::queries::report_crud::get_report_scoped(conn, id, scope))
    }

    fn update(
        &self,
        id: &str,
        scope: &AccessScope,
        report: &ValidatedReport,
        actor: &AuditActor,
    ) -> MedrecResult<()> {
        let updated = self.pool.writer.with_conn_sync(|conn| {
            crate::queries::report_crud::update_report(conn, id, scope, report, actor)?;
            crate::queries::report_crud::get_report(conn, id)
        })?;
        if let Some(updated) = updated {
            self.refresh_mirror(&updated);
        }
        Ok(())
    }

    fn delete(&self, id: &str, scope: &AccessScope, actor: &AuditActor) -> MedrecResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::report_crud::delete_report(conn, id, scope, actor))?;
        self.documents.remove(id);
        Ok(())
    }

    fn list_by_owner(&self, owner_id: i64) -> MedrecResult<Vec<HealthReport>> {
        self.with_reader(|conn| crate::queries::report_query::list_by_owner(conn, owner_id))
    }

    fn search(&self, scope: &AccessScope, filter: &SearchFilter) -> MedrecResult<Vec<HealthReport>> {
        self.with_reader(|conn| crate::queries::report_query::search(conn, scope, filter))
    }

    fn analytics(&self) -> MedrecResult<ReportAnalytics> {
        self.with_reader(crate::queries::analytics::report_analytics)
    }

    fn audit_trail(&self, report_id: &str) -> MedrecResult<Vec<AuditEntry>> {
        self.with_reader(|conn| crate::audit::trail_for_report(conn, report_id))
    }
}

impl IAccountDirectory for StorageEngine {
    fn create_account(&self, account: &NewAccount, approved: bool) -> MedrecResult<Account> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::accounts::insert_account(conn, account, approved))
    }

    fn find_account(&self, id: i64) -> MedrecResult<Option<Account>> {
        self.with_reader(|conn| crate::queries::accounts::find_account(conn, id))
    }

    fn find_by_username(&self, username: &str) -> MedrecResult<Option<Account>> {
        self.with_reader(|conn| crate::queries::accounts::find_by_username(conn, username))
    }

    fn list_accounts(&self) -> MedrecResult<Vec<Account>> {
        self.with_reader(crate::queries::accounts::list_accounts)
    }

    fn approve_account(&self, id: i64) -> MedrecResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::accounts::approve_account(conn, id))
    }

    fn remove_account(&self, id: i64) -> MedrecResult<()> {
        // Collect the account's reports first so the mirror can drop the
        // rows the foreign key cascade is about to remove.
        let owned = self.pool.writer.with_conn_sync(|conn| {
            let reports = crate::queries::report_query::list_by_owner(conn, id)?;
            crate::queries::accounts::delete_account(conn, id)?;
            Ok(reports)
        })?;
        for report in &owned {
            self.documents.remove(&report.id);
        }
        Ok(())
    }
}
