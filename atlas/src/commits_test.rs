use std::sync::Arc;

use super::*;
use crate::diagnostics::MemorySink;
use crate::persistence::MemoryBackend;

#[test]
fn submit_prepends_trimmed_note() {
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store);
    let mut live = LiveRegion::default();
    log.submit("primeiro", &store, &mut live).unwrap();
    log.submit("  segundo \n", &store, &mut live).unwrap();
    assert_eq!(log.notes(), ["segundo", "primeiro"]);
    assert_eq!(live.message(), SUBMITTED_ANNOUNCEMENT);
    assert_eq!(live.seq(), 2);
}

#[test]
fn whitespace_only_is_rejected_without_side_effects() {
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store);
    let mut live = LiveRegion::default();
    assert_eq!(log.submit(" \t\n", &store, &mut live), Err(CommitError::Empty));
    assert!(log.notes().is_empty());
    assert_eq!(store.get(COMMITS_KEY), None);
    assert_eq!(live.seq(), 0);
}

#[test]
fn list_is_capped_keeping_newest() {
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store);
    let mut live = LiveRegion::default();
    for i in 0..55 {
        log.submit(&format!("nota {i}"), &store, &mut live).unwrap();
    }
    assert_eq!(log.notes().len(), COMMIT_CAP);
    assert_eq!(log.notes()[0], "nota 54");
    assert_eq!(log.notes()[COMMIT_CAP - 1], "nota 5");
    let reloaded = CommitLog::load(&store);
    assert_eq!(reloaded.notes(), log.notes());
    assert_eq!(reloaded.notes()[0], "nota 54");
}

#[test]
fn notes_survive_reload() {
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store);
    log.submit("fica", &store, &mut LiveRegion::default()).unwrap();
    assert_eq!(store.get(COMMITS_KEY).as_deref(), Some(r#"["fica"]"#));
    assert_eq!(CommitLog::load(&store).notes(), ["fica"]);
}

#[test]
fn corrupt_storage_loads_empty() {
    let store = PersistenceStore::in_memory();
    store.set(COMMITS_KEY, "{not json");
    assert!(CommitLog::load(&store).notes().is_empty());
}

#[test]
fn clear_empties_memory_and_storage() {
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store);
    assert!(!log.can_clear());
    log.submit("x", &store, &mut LiveRegion::default()).unwrap();
    assert!(log.can_clear());
    log.clear(&store);
    assert!(!log.can_clear());
    assert_eq!(store.get(COMMITS_KEY), None);
}

#[test]
fn quota_exceeded_keeps_note_in_memory() {
    let store = PersistenceStore::new(MemoryBackend::with_quota(4));
    let mut log = CommitLog::load(&store);
    assert!(log.submit("uma nota longa demais", &store, &mut LiveRegion::default()).is_ok());
    assert_eq!(log.notes().len(), 1);
    assert_eq!(store.get(COMMITS_KEY), None);
}

#[test]
fn submission_is_recorded() {
    let sink = Arc::new(MemorySink::default());
    let store = PersistenceStore::in_memory();
    let mut log = CommitLog::load(&store).with_diagnostics(Diagnostics::from_arc(sink.clone()));
    log.submit("a", &store, &mut LiveRegion::default()).unwrap();
    assert_eq!(sink.events(), vec![DiagEvent::CommitSubmitted { total: 1 }]);
}
