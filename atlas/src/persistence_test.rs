use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = PersistenceStore::in_memory();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn clones_share_the_backend() {
    let store = PersistenceStore::in_memory();
    let other = store.clone();
    store.set("vt_quiz_best", "3");
    assert_eq!(other.get("vt_quiz_best"), Some("3".to_owned()));
}

#[test]
fn unavailable_backend_reads_absent_and_ignores_writes() {
    let store = PersistenceStore::new(UnavailableBackend);
    store.set("k", "v");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn quota_rejects_oversized_write_and_keeps_previous_value() {
    let store = PersistenceStore::new(MemoryBackend::with_quota(8));
    store.set("k", "1234");
    store.set("k", "123456789");
    assert_eq!(store.get("k"), Some("1234".to_owned()));
}

#[test]
fn quota_counts_replacement_not_accumulation() {
    let backend = MemoryBackend::with_quota(6);
    assert!(backend.set_item("k", "abcde").is_ok());
    assert!(backend.set_item("k", "vwxyz").is_ok());
    assert_eq!(
        backend.set_item("j", "a"),
        Err(StorageError::QuotaExceeded { key: "j".to_owned() })
    );
}
