//! # medrec-access
//!
//! Role-based authorization for report and account operations.
//!
//! Every operation is checked BEFORE executing. The policy is a single
//! decision table: it takes the acting party and the requested
//! operation and returns either a scope for the operation to run under
//! or the reason it was denied.

pub mod guard;

pub use guard::AccessGuard;
