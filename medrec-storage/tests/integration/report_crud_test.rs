//! Integration test: full report CRUD lifecycle.

use medrec_core::errors::MedrecError;
use medrec_core::models::{
    AccessScope, AuditActor, Gender, MaritalStatus, NewAccount, ResidenceType, Role,
    ValidatedReport, WorkType,
};
use medrec_core::traits::{IAccountDirectory, IReportStore};
use medrec_storage::StorageEngine;

fn make_engine_with_patient() -> (StorageEngine, i64) {
    let engine = StorageEngine::open_in_memory().unwrap();
    let account = engine
        .create_account(
            &NewAccount {
                username: "patient-one".to_string(),
                display_name: "Patient One".to_string(),
                role: Role::Patient,
            },
            true,
        )
        .unwrap();
    (engine, account.id)
}

fn make_test_report() -> ValidatedReport {
    ValidatedReport {
        age: Some(45.0),
        gender: Some(Gender::Male),
        hypertension: 1,
        heart_disease: 0,
        ever_married: Some(MaritalStatus::Yes),
        work_type: Some(WorkType::Private),
        residence_type: Some(ResidenceType::Urban),
        avg_glucose_level: Some(110.0),
        bmi: Some(23.5),
        smoking_status: "never smoked".to_string(),
        stroke: 0,
    }
}

#[test]
fn test_create_assigns_id_and_timestamp() {
    let (engine, owner_id) = make_engine_with_patient();
    let before = chrono::Utc::now();

    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    assert!(!stored.id.is_empty());
    assert!(uuid::Uuid::parse_str(&stored.id).is_ok());
    assert_eq!(stored.owner_id, owner_id);
    assert!(stored.created_at >= before);
    assert!(stored.created_at <= chrono::Utc::now());
}

#[test]
fn test_create_and_get_roundtrips_every_field() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let loaded = engine.get(&stored.id).unwrap().expect("report should exist");

    assert_eq!(loaded.id, stored.id);
    assert_eq!(loaded.owner_id, owner_id);
    assert_eq!(loaded.age, Some(45.0));
    assert_eq!(loaded.gender, Some(Gender::Male));
    assert_eq!(loaded.hypertension, 1);
    assert_eq!(loaded.heart_disease, 0);
    assert_eq!(loaded.ever_married, Some(MaritalStatus::Yes));
    assert_eq!(loaded.work_type, Some(WorkType::Private));
    assert_eq!(loaded.residence_type, Some(ResidenceType::Urban));
    assert_eq!(loaded.avg_glucose_level, Some(110.0));
    assert_eq!(loaded.bmi, Some(23.5));
    assert_eq!(loaded.smoking_status, "never smoked");
    assert_eq!(loaded.stroke, 0);
    assert_eq!(loaded.created_at, stored.created_at);
}

#[test]
fn test_sparse_report_roundtrips_missing_fields() {
    let (engine, owner_id) = make_engine_with_patient();
    let sparse = ValidatedReport::default();

    let stored = engine.create(owner_id, &sparse, &AuditActor::System).unwrap();
    let loaded = engine.get(&stored.id).unwrap().expect("report should exist");

    assert_eq!(loaded.age, None);
    assert_eq!(loaded.gender, None);
    assert_eq!(loaded.ever_married, None);
    assert_eq!(loaded.work_type, None);
    assert_eq!(loaded.residence_type, None);
    assert_eq!(loaded.avg_glucose_level, None);
    assert_eq!(loaded.bmi, None);
    assert_eq!(loaded.smoking_status, "unknown");
    assert_eq!(loaded.hypertension, 0);
    assert_eq!(loaded.stroke, 0);
}

#[test]
fn test_update_replaces_medical_fields() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let mut revised = make_test_report();
    revised.age = Some(46.0);
    revised.bmi = Some(24.0);
    revised.smoking_status = "formerly smoked".to_string();

    engine
        .update(&stored.id, &AccessScope::Any, &revised, &AuditActor::System)
        .unwrap();

    let loaded = engine.get(&stored.id).unwrap().expect("report should exist");
    assert_eq!(loaded.age, Some(46.0));
    assert_eq!(loaded.bmi, Some(24.0));
    assert_eq!(loaded.smoking_status, "formerly smoked");
    // Identity and creation time never change on update.
    assert_eq!(loaded.owner_id, owner_id);
    assert_eq!(loaded.created_at, stored.created_at);
}

#[test]
fn test_update_missing_report_returns_not_found() {
    let (engine, _) = make_engine_with_patient();

    let result = engine.update(
        "no-such-id",
        &AccessScope::Any,
        &make_test_report(),
        &AuditActor::System,
    );

    match result {
        Err(MedrecError::ReportNotFound { id }) => assert_eq!(id, "no-such-id"),
        other => panic!("expected ReportNotFound, got {other:?}"),
    }
}

#[test]
fn test_delete_then_get_returns_none() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    engine
        .delete(&stored.id, &AccessScope::Any, &AuditActor::System)
        .unwrap();

    assert!(engine.get(&stored.id).unwrap().is_none());
}

#[test]
fn test_double_delete_returns_not_found() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    engine
        .delete(&stored.id, &AccessScope::Any, &AuditActor::System)
        .unwrap();
    let result = engine.delete(&stored.id, &AccessScope::Any, &AuditActor::System);

    assert!(matches!(result, Err(MedrecError::ReportNotFound { .. })));
}

#[test]
fn test_get_nonexistent_returns_none() {
    let (engine, _) = make_engine_with_patient();
    assert!(engine.get("does-not-exist").unwrap().is_none());
}

#[test]
fn test_list_by_owner_newest_first() {
    let (engine, owner_id) = make_engine_with_patient();

    let first = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();
    let second = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();
    let third = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let listed = engine.list_by_owner(owner_id).unwrap();
    let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(ids, vec![&third.id, &second.id, &first.id]);
}

#[test]
fn test_list_by_owner_excludes_other_owners() {
    let (engine, owner_id) = make_engine_with_patient();
    let other = engine
        .create_account(
            &NewAccount {
                username: "patient-two".to_string(),
                display_name: "Patient Two".to_string(),
                role: Role::Patient,
            },
            true,
        )
        .unwrap();

    engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();
    engine
        .create(other.id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let listed = engine.list_by_owner(owner_id).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].owner_id, owner_id);
}

#[test]
fn test_create_mirrors_report_as_document() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let doc = engine
        .documents()
        .get(&stored.id)
        .expect("mirror entry should exist");
    assert_eq!(doc["id"], stored.id.as_str());
    assert_eq!(doc["owner_id"], owner_id);
    assert_eq!(doc["bmi"], 23.5);
}

#[test]
fn test_delete_drops_document_mirror_entry() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();
    assert!(engine.documents().get(&stored.id).is_some());

    engine
        .delete(&stored.id, &AccessScope::Any, &AuditActor::System)
        .unwrap();

    assert!(engine.documents().get(&stored.id).is_none());
}

#[test]
fn test_update_refreshes_document_mirror() {
    let (engine, owner_id) = make_engine_with_patient();
    let stored = engine
        .create(owner_id, &make_test_report(), &AuditActor::System)
        .unwrap();

    let mut revised = make_test_report();
    revised.bmi = Some(30.0);
    engine
        .update(&stored.id, &AccessScope::Any, &revised, &AuditActor::System)
        .unwrap();

    let doc = engine.documents().get(&stored.id).expect("mirror entry");
    assert_eq!(doc["bmi"], 30.0);
}
