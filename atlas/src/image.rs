//! One rendered image reference with one-shot placeholder substitution.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::consts::PLACEHOLDER_IMAGE;

/// Image shown in a sidebar row, thumbnail, or modal.
///
/// Starts on the entity's URL, or on [`PLACEHOLDER_IMAGE`] when there is none,
/// so no view ever renders an empty `src`. A load error swaps to the
/// placeholder exactly once; an error on the placeholder itself is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    original: Option<String>,
    failed: bool,
}

impl ImageSlot {
    #[must_use]
    pub fn new(url: Option<&str>) -> Self {
        let original = url.map(str::trim).filter(|u| !u.is_empty()).map(str::to_owned);
        Self { original, failed: false }
    }

    /// Current `src` attribute value.
    #[must_use]
    pub fn src(&self) -> &str {
        match &self.original {
            Some(url) if !self.failed => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    #[must_use]
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.original.is_none() || self.failed
    }

    /// Record a load error. Returns `true` when this call swapped a real URL
    /// to the placeholder (and so should be counted as a failure).
    pub fn fail(&mut self) -> bool {
        if self.is_placeholder() {
            return false;
        }
        self.failed = true;
        true
    }
}
