// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use super::helpers::{call_sign, manual_count, pending_participation};
use crate::{PersistenceError, RecordStore};
use asx_events_domain::{CallSignCode, CallSignId, ParticipationId};

#[test]
fn test_new_store_loads_empty_record_set() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let records = store.load_records().unwrap();
    assert!(records.call_signs.is_empty());
    assert!(records.event_participations.is_empty());
    assert!(records.manual_participation_counts.is_empty());
}

#[test]
fn test_call_sign_round_trips_through_store() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let cs = call_sign("cs-1", "DAL123");
    store.insert_call_sign(&cs).unwrap();

    let records = store.load_records().unwrap();
    assert_eq!(records.call_signs, vec![cs]);
}

#[test]
fn test_participation_round_trips_with_timestamps() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();

    let mut participation = pending_participation("p-1", "cs-1", "2026-02-14");
    participation.approve(datetime!(2026-02-15 09:30:00 UTC));
    store.insert_participation(&participation).unwrap();

    let records = store.load_records().unwrap();
    assert_eq!(records.event_participations, vec![participation]);
}

#[test]
fn test_load_preserves_insertion_order() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-b", "UAL900")).unwrap();
    store.insert_call_sign(&call_sign("cs-a", "AAL100")).unwrap();

    let records = store.load_records().unwrap();
    let ids: Vec<&str> = records
        .call_signs
        .iter()
        .map(|cs| cs.id.value())
        .collect();
    assert_eq!(ids, vec!["cs-b", "cs-a"]);
}

#[test]
fn test_update_call_sign_rewrites_row() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let mut cs = call_sign("cs-1", "DAL123");
    store.insert_call_sign(&cs).unwrap();

    cs.code = CallSignCode::new("DAL456").unwrap();
    cs.is_active = false;
    store.update_call_sign(&cs).unwrap();

    let records = store.load_records().unwrap();
    assert_eq!(records.call_signs, vec![cs]);
}

#[test]
fn test_update_missing_call_sign_is_not_found() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let cs = call_sign("cs-missing", "DAL123");
    let err = store.update_call_sign(&cs).unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}

#[test]
fn test_duplicate_call_sign_code_is_rejected_by_schema() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();
    let err = store.insert_call_sign(&call_sign("cs-2", "DAL123")).unwrap_err();
    assert!(matches!(err, PersistenceError::DatabaseError(_)));
}

#[test]
fn test_participation_without_call_sign_violates_foreign_key() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let participation = pending_participation("p-1", "cs-ghost", "2026-02-14");
    let err = store.insert_participation(&participation).unwrap_err();
    assert!(matches!(err, PersistenceError::DatabaseError(_)));
}

#[test]
fn test_delete_call_sign_removes_dependents() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();
    store.insert_call_sign(&call_sign("cs-2", "UAL900")).unwrap();
    store
        .insert_participation(&pending_participation("p-1", "cs-1", "2026-02-14"))
        .unwrap();
    store
        .insert_participation(&pending_participation("p-2", "cs-2", "2026-02-14"))
        .unwrap();
    store.upsert_manual_count(&manual_count("m-1", "cs-1", 4)).unwrap();

    store.delete_call_sign(&CallSignId::new("cs-1")).unwrap();

    let records = store.load_records().unwrap();
    assert_eq!(records.call_signs.len(), 1);
    assert_eq!(records.call_signs[0].id.value(), "cs-2");
    assert_eq!(records.event_participations.len(), 1);
    assert_eq!(records.event_participations[0].id.value(), "p-2");
    assert!(records.manual_participation_counts.is_empty());
}

#[test]
fn test_delete_missing_call_sign_is_not_found() {
    let mut store = RecordStore::new_in_memory().unwrap();
    let err = store.delete_call_sign(&CallSignId::new("cs-ghost")).unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}

#[test]
fn test_delete_participation_removes_single_row() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();
    store
        .insert_participation(&pending_participation("p-1", "cs-1", "2026-02-14"))
        .unwrap();

    store.delete_participation(&ParticipationId::new("p-1")).unwrap();
    let records = store.load_records().unwrap();
    assert!(records.event_participations.is_empty());

    let err = store
        .delete_participation(&ParticipationId::new("p-1"))
        .unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}

#[test]
fn test_upsert_manual_count_overwrites_existing_row() {
    let mut store = RecordStore::new_in_memory().unwrap();
    store.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();
    store.upsert_manual_count(&manual_count("m-1", "cs-1", 4)).unwrap();

    let mut updated = manual_count("m-1", "cs-1", 9);
    updated.updated_at = datetime!(2026-03-01 12:00:00 UTC);
    store.upsert_manual_count(&updated).unwrap();

    let records = store.load_records().unwrap();
    assert_eq!(records.manual_participation_counts, vec![updated]);
}

#[test]
fn test_stores_are_isolated_from_each_other() {
    let mut first = RecordStore::new_in_memory().unwrap();
    let mut second = RecordStore::new_in_memory().unwrap();
    first.insert_call_sign(&call_sign("cs-1", "DAL123")).unwrap();

    let records = second.load_records().unwrap();
    assert!(records.call_signs.is_empty());
}
