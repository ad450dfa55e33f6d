//! Integration test: account lifecycle and username uniqueness.

use medrec_core::errors::MedrecError;
use medrec_core::models::{AuditActor, NewAccount, Role, ValidatedReport};
use medrec_core::traits::{IAccountDirectory, IReportStore};
use medrec_storage::StorageEngine;

fn make_account(username: &str, role: Role) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        display_name: format!("Display {username}"),
        role,
    }
}

#[test]
fn test_create_account_assigns_id_and_flags() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let account = engine
        .create_account(&make_account("maria", Role::Patient), false)
        .unwrap();

    assert!(account.id > 0);
    assert_eq!(account.username, "maria");
    assert_eq!(account.display_name, "Display maria");
    assert_eq!(account.role, Role::Patient);
    assert!(!account.approved);
}

#[test]
fn test_create_account_preapproved() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let account = engine
        .create_account(&make_account("root", Role::Admin), true)
        .unwrap();

    assert!(account.approved);
}

#[test]
fn test_duplicate_username_is_rejected() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .create_account(&make_account("taken", Role::Patient), false)
        .unwrap();

    let result = engine.create_account(&make_account("taken", Role::Doctor), false);

    match result {
        Err(MedrecError::UsernameTaken { username }) => assert_eq!(username, "taken"),
        other => panic!("expected UsernameTaken, got {other:?}"),
    }
}

#[test]
fn test_find_account_and_by_username() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let created = engine
        .create_account(&make_account("findme", Role::Doctor), true)
        .unwrap();

    let by_id = engine.find_account(created.id).unwrap().expect("should exist");
    assert_eq!(by_id.username, "findme");
    assert_eq!(by_id.role, Role::Doctor);

    let by_name = engine
        .find_by_username("findme")
        .unwrap()
        .expect("should exist");
    assert_eq!(by_name.id, created.id);

    assert!(engine.find_account(9999).unwrap().is_none());
    assert!(engine.find_by_username("nobody").unwrap().is_none());
}

#[test]
fn test_approve_flips_flag() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let account = engine
        .create_account(&make_account("pending", Role::Patient), false)
        .unwrap();
    assert!(!account.approved);

    engine.approve_account(account.id).unwrap();

    let reloaded = engine.find_account(account.id).unwrap().unwrap();
    assert!(reloaded.approved);
}

#[test]
fn test_approve_missing_account_returns_not_found() {
    let engine = StorageEngine::open_in_memory().unwrap();

    let result = engine.approve_account(424242);

    match result {
        Err(MedrecError::AccountNotFound { id }) => assert_eq!(id, 424242),
        other => panic!("expected AccountNotFound, got {other:?}"),
    }
}

#[test]
fn test_list_accounts_newest_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let a = engine
        .create_account(&make_account("first", Role::Patient), false)
        .unwrap();
    let b = engine
        .create_account(&make_account("second", Role::Patient), false)
        .unwrap();
    let c = engine
        .create_account(&make_account("third", Role::Patient), false)
        .unwrap();

    let listed = engine.list_accounts().unwrap();
    let ids: Vec<i64> = listed.iter().map(|account| account.id).collect();

    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[test]
fn test_remove_missing_account_returns_not_found() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(matches!(
        engine.remove_account(31337),
        Err(MedrecError::AccountNotFound { .. })
    ));
}

#[test]
fn test_remove_account_cascades_to_reports() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let patient = engine
        .create_account(&make_account("leaving", Role::Patient), true)
        .unwrap();
    let keeper = engine
        .create_account(&make_account("staying", Role::Patient), true)
        .unwrap();

    let gone = engine
        .create(patient.id, &ValidatedReport::default(), &AuditActor::System)
        .unwrap();
    let kept = engine
        .create(keeper.id, &ValidatedReport::default(), &AuditActor::System)
        .unwrap();

    engine.remove_account(patient.id).unwrap();

    assert!(engine.find_account(patient.id).unwrap().is_none());
    assert!(engine.get(&gone.id).unwrap().is_none(), "reports must cascade");
    assert!(engine.documents().get(&gone.id).is_none(), "mirror must drop cascaded rows");
    assert!(engine.get(&kept.id).unwrap().is_some(), "other owners unaffected");
}
