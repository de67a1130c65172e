//! Draft persistence against real files: save/load round-trips, missing
//! and corrupt slots, reset semantics.

mod common;

use pardoc::{default_record, DraftStore, FileSlot, ParPatch};

fn file_store(dir: &tempfile::TempDir) -> DraftStore<FileSlot> {
    DraftStore::new(FileSlot::new(dir.path().join("par-draft.json")))
}

#[test]
fn save_then_fresh_load_reproduces_the_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = file_store(&dir);
    store.apply(ParPatch::ProjectName("Network Upgrade".into()));
    store.apply(ParPatch::EstimatedBudget("$3,000,000".into()));
    let saved = store.record().clone();
    store.save().unwrap();

    // A fresh store over the same slot sees the same record.
    let mut fresh = file_store(&dir);
    assert!(fresh.load().unwrap());
    assert_eq!(fresh.record(), &saved);
    assert!(!fresh.is_dirty());
}

#[test]
fn load_with_no_slot_keeps_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(&dir);
    assert!(!store.load().unwrap());
    assert_eq!(store.record(), &default_record());
}

#[test]
fn clear_then_load_leaves_the_default_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = file_store(&dir);
    store.apply(ParPatch::ProjectName("Network Upgrade".into()));
    store.save().unwrap();
    store.clear().unwrap();

    let mut fresh = file_store(&dir);
    assert!(!fresh.load().unwrap(), "no crash and no data on a cleared slot");
    assert_eq!(fresh.record(), &default_record());
}

#[test]
fn corrupt_slot_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("par-draft.json"), "{ definitely not json").unwrap();

    let mut store = file_store(&dir);
    assert!(!store.load().unwrap());
    assert_eq!(store.record(), &default_record());
}

#[test]
fn dirty_flag_tracks_the_edit_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(&dir);

    assert!(!store.is_dirty());
    store.apply(ParPatch::ProjectName("Network Upgrade".into()));
    assert!(store.is_dirty());
    store.save().unwrap();
    assert!(!store.is_dirty());
    store.apply(ParPatch::ProgramName("Core Infrastructure".into()));
    assert!(store.is_dirty());
}

#[test]
fn reset_restores_defaults_and_removes_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(&dir);
    store.apply(ParPatch::ProjectName("Network Upgrade".into()));
    store.save().unwrap();

    store.reset().unwrap();
    assert_eq!(store.record(), &default_record());
    assert!(!dir.path().join("par-draft.json").exists());
}
