//! Integration test suite for the storage engine.

mod accounts_test;
mod audit_test;
mod report_crud_test;
mod scoped_ops_test;
