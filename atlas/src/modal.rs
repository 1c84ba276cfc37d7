//! Modal image viewer: a Closed/Open state machine with focus restoration.
//!
//! DESIGN
//! ======
//! The dialog is constructed with the already-loaded [`Dataset`] and resolves
//! entities with a pure in-memory lookup; it never fetches. `F` is whatever the
//! UI uses as a focus handle (a DOM element in the browser); the dialog only
//! stores the handle captured before it opened and hands it back on close.
//!
//! Opening while already open re-populates in place: the image list and
//! caption are rebuilt from scratch, and the focus-restore target stays the
//! element that was focused before the dialog first opened.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::sync::Arc;

use crate::consts::{CAPTION_SEPARATOR, CREDIT_PREFIX};
use crate::dataset::{Dataset, Povo};
use crate::diagnostics::{DiagEvent, Diagnostics, ImageStats};
use crate::image::ImageSlot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("no entity named {0}")]
    UnknownEntity(String),
}

/// What dismissed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// Click on the backdrop outside the dialog content.
    Backdrop,
    /// Escape key.
    CancelKey,
}

/// Content of the open dialog.
#[derive(Debug, Clone)]
pub struct OpenModal<F> {
    pub povo: Arc<Povo>,
    pub images: Vec<ImageSlot>,
    pub caption: String,
    return_focus: Option<F>,
}

impl<F> OpenModal<F> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.povo.name
    }
}

/// The single dialog instance for the page.
#[derive(Debug, Clone)]
pub struct ModalDialog<F> {
    dataset: Dataset,
    /// `None` while closed.
    open: Option<OpenModal<F>>,
    diagnostics: Diagnostics,
}

impl<F> ModalDialog<F> {
    #[must_use]
    pub fn new(dataset: Dataset, diagnostics: Diagnostics) -> Self {
        Self { dataset, open: None, diagnostics }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Content of the open dialog, if any.
    #[must_use]
    pub fn current(&self) -> Option<&OpenModal<F>> {
        self.open.as_ref()
    }

    /// Open (or re-populate) the dialog for `name`.
    ///
    /// `opener` is the focus handle to restore on close; it is ignored when
    /// the dialog is already open.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::UnknownEntity`] when no entity has that name; the
    /// dialog state is left untouched.
    pub fn open(&mut self, name: &str, opener: Option<F>) -> Result<&OpenModal<F>, ModalError> {
        let povo = self.dataset.get(name).cloned().ok_or_else(|| ModalError::UnknownEntity(name.to_owned()))?;

        let return_focus = match self.open.take() {
            Some(previous) => previous.return_focus,
            None => opener,
        };

        let images = image_slots(&povo);
        let caption = compose_caption(&povo);
        self.diagnostics.record(DiagEvent::ModalOpened { name: povo.name.clone(), images: povo.images.len() });
        log::debug!("modal opened for {}", povo.name);

        Ok(self.open.insert(OpenModal { povo, images, caption, return_focus }))
    }

    /// Close the dialog and return the focus handle captured at open.
    /// Closing an already-closed dialog is a no-op.
    pub fn close(&mut self, trigger: CloseTrigger) -> Option<F> {
        let open = self.open.take()?;
        log::debug!("modal closed via {trigger:?}");
        self.diagnostics.record(DiagEvent::ModalClosed);
        open.return_focus
    }

    /// A modal image failed to load. Returns `true` when it was swapped to the
    /// placeholder and counted.
    pub fn image_failed(&mut self, index: usize, stats: &ImageStats) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        let Some(slot) = open.images.get_mut(index) else {
            return false;
        };
        let src = slot.src().to_owned();
        if !slot.fail() {
            return false;
        }
        stats.record_failed(&open.povo.name, &src, &self.diagnostics);
        true
    }

    /// A modal image finished loading; placeholders are not counted.
    pub fn image_loaded(&self, index: usize, stats: &ImageStats) {
        let Some(slot) = self.current().and_then(|open| open.images.get(index)) else {
            return;
        };
        if !slot.is_placeholder() {
            stats.record_loaded(slot.src(), &self.diagnostics);
        }
    }
}

/// One slot per URL; a single placeholder slot when the entity has none.
fn image_slots(povo: &Povo) -> Vec<ImageSlot> {
    if povo.images.is_empty() {
        return vec![ImageSlot::new(None)];
    }
    povo.images.iter().map(|url| ImageSlot::new(Some(url))).collect()
}

/// Caption line: caption and credit joined when both exist, either alone
/// otherwise, the entity name when neither does.
#[must_use]
pub fn compose_caption(povo: &Povo) -> String {
    let credit = povo.credit.as_ref().map(|c| format!("{CREDIT_PREFIX}{c}"));
    let parts: Vec<&str> = [povo.caption.as_deref(), credit.as_deref()].into_iter().flatten().collect();
    if parts.is_empty() { povo.name.clone() } else { parts.join(CAPTION_SEPARATOR) }
}
