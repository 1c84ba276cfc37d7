//! Thumbnail gallery over a bounded prefix of the dataset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thumbnails are keyboard-focusable. Activating one announces the entity's
//! summary through the live region; each also carries an open-gallery control
//! keyed by name so the modal resolves the same entity.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::consts::GALLERY_LIMIT;
use crate::dataset::Dataset;
use crate::diagnostics::{DiagEvent, Diagnostics, ImageStats};
use crate::image::ImageSlot;
use crate::live::LiveRegion;

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub name: String,
    pub summary: String,
    pub slot: ImageSlot,
}

impl Thumbnail {
    /// Live-region text for this thumbnail.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("{}: {}", self.name, self.summary)
    }
}

#[derive(Debug, Clone)]
pub struct GalleryThumbnails {
    limit: usize,
    thumbs: Vec<Thumbnail>,
}

impl Default for GalleryThumbnails {
    fn default() -> Self {
        Self::with_limit(GALLERY_LIMIT)
    }
}

impl GalleryThumbnails {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit, thumbs: Vec::new() }
    }

    /// Replace all thumbnails with the first `limit` entities.
    pub fn rebuild(&mut self, dataset: &Dataset, diagnostics: &Diagnostics) {
        self.thumbs.clear();
        for povo in dataset.iter().take(self.limit) {
            let slot = ImageSlot::new(povo.first_image());
            diagnostics.record(DiagEvent::ThumbnailAdded { name: povo.name.clone(), src: slot.src().to_owned() });
            self.thumbs.push(Thumbnail { name: povo.name.clone(), summary: povo.summary.clone(), slot });
        }
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbs
    }

    /// Click or Enter/Space on a thumbnail. Returns `false` for a stale index.
    pub fn activate(&self, index: usize, live: &mut LiveRegion) -> bool {
        match self.thumbs.get(index) {
            Some(thumb) => {
                live.announce(thumb.announcement());
                true
            }
            None => false,
        }
    }

    /// Thumbnail failed to load; swap to the placeholder and count it.
    pub fn image_failed(&mut self, index: usize, stats: &ImageStats, diagnostics: &Diagnostics) {
        let Some(thumb) = self.thumbs.get_mut(index) else {
            return;
        };
        let src = thumb.slot.src().to_owned();
        if thumb.slot.fail() {
            stats.record_failed(&thumb.name, &src, diagnostics);
        }
    }

    pub fn image_loaded(&self, index: usize, stats: &ImageStats, diagnostics: &Diagnostics) {
        if let Some(thumb) = self.thumbs.get(index).filter(|t| !t.slot.is_placeholder()) {
            stats.record_loaded(thumb.slot.src(), diagnostics);
        }
    }
}
