//! Integration test: owner scoping is bound into the SQL, so a restricted
//! caller can never observe or mutate another owner's rows.

use medrec_core::errors::MedrecError;
use medrec_core::models::{AccessScope, AuditActor, NewAccount, Role, ValidatedReport};
use medrec_core::traits::{IAccountDirectory, IReportStore};
use medrec_storage::StorageEngine;

struct TwoPatients {
    engine: StorageEngine,
    alice_id: i64,
    bob_id: i64,
    alice_report: String,
}

fn make_two_patients() -> TwoPatients {
    let engine = StorageEngine::open_in_memory().unwrap();
    let alice = engine
        .create_account(
            &NewAccount {
                username: "alice".to_string(),
                display_name: "Alice".to_string(),
                role: Role::Patient,
            },
            true,
        )
        .unwrap();
    let bob = engine
        .create_account(
            &NewAccount {
                username: "bob".to_string(),
                display_name: "Bob".to_string(),
                role: Role::Patient,
            },
            true,
        )
        .unwrap();

    let report = ValidatedReport {
        age: Some(45.0),
        ..ValidatedReport::default()
    };
    let stored = engine
        .create(alice.id, &report, &AuditActor::Account(alice.id))
        .unwrap();

    TwoPatients {
        engine,
        alice_id: alice.id,
        bob_id: bob.id,
        alice_report: stored.id,
    }
}

#[test]
fn test_owner_scope_reads_own_report() {
    let t = make_two_patients();

    let loaded = t
        .engine
        .get_scoped(&t.alice_report, &AccessScope::Owner(t.alice_id))
        .unwrap();

    assert!(loaded.is_some());
    assert_eq!(loaded.unwrap().owner_id, t.alice_id);
}

#[test]
fn test_owner_scope_cannot_read_foreign_report() {
    let t = make_two_patients();

    let loaded = t
        .engine
        .get_scoped(&t.alice_report, &AccessScope::Owner(t.bob_id))
        .unwrap();

    assert!(loaded.is_none(), "foreign rows must be invisible, not filtered after the fact");
}

#[test]
fn test_any_scope_reads_everything() {
    let t = make_two_patients();

    let loaded = t
        .engine
        .get_scoped(&t.alice_report, &AccessScope::Any)
        .unwrap();

    assert!(loaded.is_some());
}

#[test]
fn test_owner_scope_update_of_foreign_report_fails_and_leaves_row() {
    let t = make_two_patients();

    let mut revised = ValidatedReport::default();
    revised.age = Some(99.0);

    let result = t.engine.update(
        &t.alice_report,
        &AccessScope::Owner(t.bob_id),
        &revised,
        &AuditActor::Account(t.bob_id),
    );

    assert!(matches!(result, Err(MedrecError::ReportNotFound { .. })));

    let intact = t.engine.get(&t.alice_report).unwrap().expect("row must remain");
    assert_eq!(intact.age, Some(45.0), "foreign update must not change the row");
}

#[test]
fn test_owner_scope_delete_of_foreign_report_fails_and_leaves_row() {
    let t = make_two_patients();

    let result = t.engine.delete(
        &t.alice_report,
        &AccessScope::Owner(t.bob_id),
        &AuditActor::Account(t.bob_id),
    );

    assert!(matches!(result, Err(MedrecError::ReportNotFound { .. })));
    assert!(
        t.engine.get(&t.alice_report).unwrap().is_some(),
        "foreign delete must not remove the row"
    );
}

#[test]
fn test_owner_scope_update_of_own_report_succeeds() {
    let t = make_two_patients();

    let mut revised = ValidatedReport::default();
    revised.age = Some(46.0);

    t.engine
        .update(
            &t.alice_report,
            &AccessScope::Owner(t.alice_id),
            &revised,
            &AuditActor::Account(t.alice_id),
        )
        .unwrap();

    let loaded = t.engine.get(&t.alice_report).unwrap().unwrap();
    assert_eq!(loaded.age, Some(46.0));
}

#[test]
fn test_owner_scope_delete_of_own_report_succeeds() {
    let t = make_two_patients();

    t.engine
        .delete(
            &t.alice_report,
            &AccessScope::Owner(t.alice_id),
            &AuditActor::Account(t.alice_id),
        )
        .unwrap();

    assert!(t.engine.get(&t.alice_report).unwrap().is_none());
}
