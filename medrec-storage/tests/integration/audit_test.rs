//! Integration test: audit trail written alongside report mutations.

use medrec_core::models::{
    AccessScope, AuditActor, AuditOperation, NewAccount, Role, ValidatedReport,
};
use medrec_core::traits::{IAccountDirectory, IReportStore};
use medrec_storage::StorageEngine;

fn make_engine_with_patient() -> (StorageEngine, i64) {
    let engine = StorageEngine::open_in_memory().unwrap();
    let account = engine
        .create_account(
            &NewAccount {
                username: "audited".to_string(),
                display_name: "Audited Patient".to_string(),
                role: Role::Patient,
            },
            true,
        )
        .unwrap();
    (engine, account.id)
}

#[test]
fn test_create_writes_audit_entry() {
    let (engine, owner_id) = make_engine_with_patient();

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &AuditActor::Account(owner_id))
        .unwrap();

    let trail = engine.audit_trail(&stored.id).unwrap();
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].report_id, stored.id);
    assert_eq!(trail[0].operation, AuditOperation::Create);
    assert_eq!(trail[0].actor, AuditActor::Account(owner_id));
    assert_eq!(trail[0].details["owner_id"], owner_id);
}

#[test]
fn test_full_lifecycle_leaves_ordered_trail() {
    let (engine, owner_id) = make_engine_with_patient();
    let actor = AuditActor::Account(owner_id);

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &actor)
        .unwrap();
    engine
        .update(&stored.id, &AccessScope::Any, &ValidatedReport::default(), &actor)
        .unwrap();
    engine.delete(&stored.id, &AccessScope::Any, &actor).unwrap();

    let trail = engine.audit_trail(&stored.id).unwrap();
    let operations: Vec<AuditOperation> = trail.iter().map(|entry| entry.operation).collect();

    assert_eq!(
        operations,
        vec![AuditOperation::Create, AuditOperation::Update, AuditOperation::Delete]
    );
}

#[test]
fn test_trail_survives_report_deletion() {
    let (engine, owner_id) = make_engine_with_patient();
    let actor = AuditActor::Account(owner_id);

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &actor)
        .unwrap();
    engine.delete(&stored.id, &AccessScope::Any, &actor).unwrap();

    assert!(engine.get(&stored.id).unwrap().is_none());
    let trail = engine.audit_trail(&stored.id).unwrap();
    assert_eq!(trail.len(), 2, "trail must outlive the report");
}

#[test]
fn test_failed_delete_leaves_no_entry() {
    let (engine, owner_id) = make_engine_with_patient();
    let actor = AuditActor::Account(owner_id);

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &actor)
        .unwrap();

    // Scoped to a different owner, so the delete touches no rows.
    let result = engine.delete(&stored.id, &AccessScope::Owner(owner_id + 1), &actor);
    assert!(result.is_err());

    let trail = engine.audit_trail(&stored.id).unwrap();
    assert_eq!(trail.len(), 1, "only the create may be recorded");
    assert_eq!(trail[0].operation, AuditOperation::Create);
}

#[test]
fn test_system_actor_attribution() {
    let (engine, owner_id) = make_engine_with_patient();

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &AuditActor::System)
        .unwrap();

    let trail = engine.audit_trail(&stored.id).unwrap();
    assert_eq!(trail[0].actor, AuditActor::System);
}

#[test]
fn test_trail_for_unknown_report_is_empty() {
    let (engine, _) = make_engine_with_patient();
    assert!(engine.audit_trail("never-existed").unwrap().is_empty());
}

#[test]
fn test_entries_carry_timestamps() {
    let (engine, owner_id) = make_engine_with_patient();

    let stored = engine
        .create(owner_id, &ValidatedReport::default(), &AuditActor::System)
        .unwrap();

    let trail = engine.audit_trail(&stored.id).unwrap();
    let now = chrono::Utc::now();
    assert!(trail[0].timestamp <= now);
    assert!(now - trail[0].timestamp < chrono::Duration::minutes(1));
}
