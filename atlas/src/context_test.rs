use std::sync::Arc;

use super::*;
use crate::diagnostics::{MemorySink, StatusKey};
use crate::fixtures_test::eight;

#[test]
fn new_publishes_expected_image_count() {
    let sink = Arc::new(MemorySink::default());
    let ctx = AppContext::new(
        AtlasConfig::default(),
        eight(),
        PersistenceStore::in_memory(),
        Diagnostics::from_arc(sink.clone()),
    );
    assert_eq!(ctx.images.snapshot().expected, 7);
    assert_eq!(sink.readout().get(StatusKey::Images), Some("0/7 carregadas"));
}

#[test]
fn clones_share_image_counters() {
    let ctx = AppContext::new(AtlasConfig::default(), eight(), PersistenceStore::in_memory(), Diagnostics::noop());
    let other = ctx.clone();
    other.images.record_loaded("https://img.example/t.jpg", &other.diagnostics);
    assert_eq!(ctx.images.snapshot().loaded, 1);
    assert!(ctx.dataset.ptr_eq(&other.dataset));
}
