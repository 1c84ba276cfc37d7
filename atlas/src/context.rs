//! Application context shared by every view.
//!
//! Built once after the dataset has loaded; the client provides it through
//! Leptos context so components get their collaborators injected instead of
//! reaching for globals.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::config::AtlasConfig;
use crate::dataset::Dataset;
use crate::diagnostics::{Diagnostics, ImageStats};
use crate::persistence::PersistenceStore;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AtlasConfig,
    pub dataset: Dataset,
    pub store: PersistenceStore,
    pub diagnostics: Diagnostics,
    pub images: ImageStats,
}

impl AppContext {
    /// Assemble the context and publish the initial image counter.
    #[must_use]
    pub fn new(config: AtlasConfig, dataset: Dataset, store: PersistenceStore, diagnostics: Diagnostics) -> Self {
        let images = ImageStats::new(dataset.stats().expected_images);
        images.publish(&diagnostics);
        Self { config, dataset, store, diagnostics, images }
    }
}
