//! Sidebar list: one keyboard-activatable row per entity.
//!
//! Each row is a small state object bound to its entity name and coordinates;
//! activating it asks the [`MarkerRegistry`] to focus that name.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::dataset::{Dataset, LatLng};
use crate::diagnostics::{DiagEvent, Diagnostics, ImageStats};
use crate::image::ImageSlot;
use crate::markers::{FocusOutcome, MapBackend, MarkerRegistry};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarRow {
    pub name: String,
    pub region: String,
    pub at: LatLng,
    pub thumb: ImageSlot,
}

#[derive(Debug, Clone, Default)]
pub struct SidebarList {
    rows: Vec<SidebarRow>,
}

impl SidebarList {
    /// Replace all rows with one per entity, in dataset order.
    pub fn rebuild(&mut self, dataset: &Dataset, diagnostics: &Diagnostics) {
        self.rows.clear();
        for povo in dataset.iter() {
            self.rows.push(SidebarRow {
                name: povo.name.clone(),
                region: povo.region.clone(),
                at: povo.position(),
                thumb: ImageSlot::new(povo.first_image()),
            });
            diagnostics.record(DiagEvent::SidebarRowAdded { name: povo.name.clone() });
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[SidebarRow] {
        &self.rows
    }

    /// Click or Enter/Space on a row: focus its marker.
    pub fn activate<B: MapBackend>(&self, index: usize, registry: &mut MarkerRegistry<B>) -> FocusOutcome {
        match self.rows.get(index) {
            Some(row) => registry.focus(&row.name, Some(row.at)),
            None => FocusOutcome::NotFound,
        }
    }

    /// Row thumbnail failed to load; swap to the placeholder and count it.
    pub fn image_failed(&mut self, index: usize, stats: &ImageStats, diagnostics: &Diagnostics) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let src = row.thumb.src().to_owned();
        if row.thumb.fail() {
            stats.record_failed(&row.name, &src, diagnostics);
        }
    }

    /// Row thumbnail loaded (placeholder loads are not counted).
    pub fn image_loaded(&self, index: usize, stats: &ImageStats, diagnostics: &Diagnostics) {
        if let Some(row) = self.rows.get(index).filter(|r| !r.thumb.is_placeholder()) {
            stats.record_loaded(row.thumb.src(), diagnostics);
        }
    }
}
