//! Page lifecycle and the signal-wrapped view models.
//!
//! DESIGN
//! ======
//! The dataset loads once; until then the page is [`LoadState::Loading`].
//! When it resolves (possibly to an empty fallback), [`PageModels::new`]
//! builds every view model from the same [`AppContext`], so a name picked in
//! one view resolves to the same entity everywhere else.
//!
//! The marker registry and the modal hold browser handles (Leaflet objects,
//! DOM elements) and therefore live in local, non-`Send` storage; everything
//! else is an ordinary `RwSignal`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use atlas::commits::CommitLog;
use atlas::context::AppContext;
use atlas::gallery::GalleryThumbnails;
use atlas::live::LiveRegion;
use atlas::diagnostics::{DiagEvent, StatusKey};
use atlas::markers::{FocusOutcome, MapError, MapStatus, MarkerRegistry};
use atlas::modal::{CloseTrigger, ModalDialog};
use atlas::quiz::{QuizEngine, best_score};
use atlas::sidebar::SidebarList;
use leptos::prelude::*;

use crate::util::dom::FocusReturn;
use crate::util::leaflet::LeafletMap;

/// Status bar value for the map slot when the library failed.
pub const MAP_UNAVAILABLE_STATUS: &str = "indisponível";

/// Whether the dataset has resolved yet.
#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(AppContext),
}

impl LoadState {
    pub fn context(&self) -> Option<&AppContext> {
        match self {
            Self::Ready(ctx) => Some(ctx),
            Self::Loading => None,
        }
    }
}

/// Every view model of the page, as copyable signal handles.
#[derive(Clone, Copy)]
pub struct PageModels {
    pub ctx: StoredValue<AppContext>,
    pub sidebar: RwSignal<SidebarList>,
    pub gallery: RwSignal<GalleryThumbnails>,
    pub modal: RwSignal<ModalDialog<FocusReturn>, LocalStorage>,
    pub quiz: RwSignal<QuizEngine>,
    /// Stored best score, mirrored so the quiz panel re-renders on change.
    pub best: RwSignal<u32>,
    pub commits: RwSignal<CommitLog>,
    pub live: RwSignal<LiveRegion>,
    pub map_status: RwSignal<MapStatus>,
    pub registry: StoredValue<Option<MarkerRegistry<LeafletMap>>, LocalStorage>,
}

impl PageModels {
    /// Build all view models from the loaded context.
    pub fn new(ctx: &AppContext, live: RwSignal<LiveRegion>) -> Self {
        let mut sidebar = SidebarList::default();
        sidebar.rebuild(&ctx.dataset, &ctx.diagnostics);
        let mut gallery = GalleryThumbnails::default();
        gallery.rebuild(&ctx.dataset, &ctx.diagnostics);

        Self {
            ctx: StoredValue::new(ctx.clone()),
            sidebar: RwSignal::new(sidebar),
            gallery: RwSignal::new(gallery),
            modal: RwSignal::new_local(ModalDialog::new(ctx.dataset.clone(), ctx.diagnostics.clone())),
            quiz: RwSignal::new(QuizEngine::with_default_questions(ctx.diagnostics.clone())),
            best: RwSignal::new(best_score(&ctx.store)),
            commits: RwSignal::new(CommitLog::load(&ctx.store).with_diagnostics(ctx.diagnostics.clone())),
            live,
            map_status: RwSignal::new(MapStatus::Pending),
            registry: StoredValue::new_local(None),
        }
    }

    /// Place markers on a freshly connected map, or switch the map region to
    /// its static fallback when the map library is unusable.
    pub fn install_map(&self, connected: Result<LeafletMap, MapError>) {
        let built = self
            .ctx
            .with_value(|ctx| connected.and_then(|map| MarkerRegistry::build(map, &ctx.dataset, ctx.diagnostics.clone())));
        match built {
            Ok(registry) => {
                log::debug!("[vt] map ready with {} markers", registry.len());
                self.registry.set_value(Some(registry));
                self.map_status.set(MapStatus::Ready);
            }
            Err(e) => {
                log::warn!("[vt] map unavailable: {e}");
                self.ctx.with_value(|ctx| {
                    ctx.diagnostics.record(DiagEvent::MapUnavailable { reason: e.to_string() });
                    ctx.diagnostics.status(StatusKey::Map, MAP_UNAVAILABLE_STATUS);
                });
                self.map_status.set(MapStatus::unavailable());
            }
        }
    }

    /// Focus the marker for sidebar row `index`.
    pub fn focus_row(&self, index: usize) -> FocusOutcome {
        let sidebar = self.sidebar;
        self.registry
            .try_update_value(|registry| match registry {
                Some(registry) => sidebar.with_untracked(|s| s.activate(index, registry)),
                None => {
                    log::debug!("[vt] map not ready; row {index} not focused");
                    FocusOutcome::NotFound
                }
            })
            .unwrap_or(FocusOutcome::NotFound)
    }

    /// Open the gallery modal for `name`, remembering what had focus.
    ///
    /// Returns `false` for an unknown name; the modal is left as it was.
    pub fn open_gallery(&self, name: &str, opener: Option<FocusReturn>) -> bool {
        let opened = self.modal.try_update(|modal| modal.open(name, opener).map(|open| open.name().to_owned()));
        match opened {
            Some(Ok(_)) => true,
            Some(Err(e)) => {
                log::warn!("[vt] gallery not opened: {e}");
                false
            }
            None => false,
        }
    }

    /// Close the modal and give focus back to the element that opened it.
    pub fn close_gallery(&self, trigger: CloseTrigger) {
        if let Some(Some(target)) = self.modal.try_update(|modal| modal.close(trigger)) {
            target.restore();
        }
    }

    /// Refresh the mirrored best score after the store changed.
    pub fn sync_best(&self) {
        let best = self.ctx.with_value(|ctx| best_score(&ctx.store));
        self.best.set(best);
    }
}
