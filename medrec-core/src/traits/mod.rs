//! Trait seams between the validation, storage, and service layers.

mod account_directory;
mod report_store;
mod validator;

pub use account_directory::IAccountDirectory;
pub use report_store::IReportStore;
pub use validator::IReportValidator;
