//! In-process JSON mirror of stored reports.
//!
//! Keeps the latest serialized form of every report keyed by id so
//! callers can hand out document snapshots without touching SQLite.
//! The mirror is rebuilt lazily: it only ever reflects writes made
//! through the engine in this process.

use dashmap::DashMap;
use serde_json::Value;

use medrec_core::errors::MedrecResult;
use medrec_core::models::HealthReport;

/// Concurrent map from report id to its JSON document.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<String, Value>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the report and store it under its id, replacing any
    /// previous snapshot.
    pub fn upsert(&self, report: &HealthReport) -> MedrecResult<()> {
        let document = serde_json::to_value(report)?;
        self.documents.insert(report.id.clone(), document);
        Ok(())
    }

    /// Drop the snapshot for a report, if present.
    pub fn remove(&self, id: &str) {
        self.documents.remove(id);
    }

    /// Clone of the JSON snapshot for a report.
    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
