//! # medrec-service
//!
//! The service layer: wires the validator, the access guard, and the
//! storage engine into the operations a transport layer calls.
//!
//! [`MedrecApp`] is the composition root. It opens the storage engine
//! from a [`MedrecConfig`] and hands out the two services sharing it.

pub mod accounts;
pub mod reports;
pub mod telemetry;

use std::sync::Arc;

use medrec_core::config::MedrecConfig;
use medrec_core::errors::MedrecResult;
use medrec_storage::StorageEngine;

pub use accounts::AccountService;
pub use reports::ReportService;

/// The assembled application: both services over one storage engine.
pub struct MedrecApp {
    pub reports: ReportService,
    pub accounts: AccountService,
}

impl MedrecApp {
    /// Opens storage per `config` and wires the services around it.
    pub fn open(config: &MedrecConfig) -> MedrecResult<Self> {
        let engine = Arc::new(StorageEngine::with_config(&config.storage)?);
        Ok(Self {
            reports: ReportService::new(engine.clone()),
            accounts: AccountService::new(engine),
        })
    }
}
