//! Map markers: backend seam, popup composition, and the name → marker registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The third-party map library sits behind [`MapBackend`]. The registry places
//! one marker per entity and keeps the authoritative name → marker mapping, so
//! the sidebar (and anything else) focuses a marker by entity name instead of
//! walking the map widget's internal layer bookkeeping.
//!
//! TRADE-OFFS
//! ==========
//! Duplicate names resolve to the last marker placed under that name. The
//! positional scan in [`MarkerRegistry::focus`] is a compatibility path only:
//! it lets a caller holding coordinates reach a marker whose name entry was
//! overwritten.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use std::collections::HashMap;

use crate::consts::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_ZOOM, FOCUS_ZOOM, IMAGE_UNAVAILABLE_TEXT,
    MAP_UNAVAILABLE_MESSAGE, OPEN_GALLERY_ATTR, OPEN_GALLERY_CLASS, PLACEHOLDER_IMAGE,
};
use crate::dataset::{Dataset, LatLng, Povo};
use crate::diagnostics::{DiagEvent, Diagnostics, StatusKey};

// =============================================================================
// BACKEND
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map library not loaded")]
    LibraryMissing,
    #[error("map library error: {0}")]
    Js(String),
}

/// Operations the registry needs from a map widget.
pub trait MapBackend {
    /// Handle to a placed marker.
    type Marker;

    /// # Errors
    /// Backend failure moving the viewport.
    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), MapError>;

    /// Place a marker with a detail popup bound to `popup_html`.
    ///
    /// # Errors
    /// Backend failure creating the marker.
    fn add_marker(&mut self, at: LatLng, popup_html: &str) -> Result<Self::Marker, MapError>;

    /// # Errors
    /// Backend failure opening the popup.
    fn open_popup(&mut self, marker: &Self::Marker) -> Result<(), MapError>;
}

/// Lifecycle of the map region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MapStatus {
    #[default]
    Pending,
    Ready,
    /// Map library failed; the region shows this static message instead.
    Unavailable(String),
}

impl MapStatus {
    #[must_use]
    pub fn unavailable() -> Self {
        Self::Unavailable(MAP_UNAVAILABLE_MESSAGE.to_owned())
    }

    /// Fallback text to render in place of the map, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// POPUP
// =============================================================================

/// Image block of a marker popup. Never silently blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupImage {
    Image { src: String, alt: String },
    Unavailable,
}

/// Detail popup content for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub title: String,
    pub region: String,
    pub language: String,
    pub body: String,
    pub image: PopupImage,
    /// Entity name carried by the open-gallery button.
    pub open_name: String,
}

impl PopupContent {
    #[must_use]
    pub fn for_povo(povo: &Povo) -> Self {
        let image = match povo.first_image() {
            Some(src) => PopupImage::Image { src: src.to_owned(), alt: povo.name.clone() },
            None => PopupImage::Unavailable,
        };
        Self {
            title: povo.name.clone(),
            region: povo.region.clone(),
            language: povo.language.clone(),
            body: povo.blurb().to_owned(),
            image,
            open_name: povo.name.clone(),
        }
    }

    /// HTML handed to the map library. All entity text is escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let image = match &self.image {
            PopupImage::Image { src, alt } => format!(
                r#"<img class="popup__image" src="{}" alt="{}" loading="lazy" onerror="this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'">"#,
                escape_html(src),
                escape_html(alt),
            ),
            PopupImage::Unavailable => format!(
                r#"<div class="popup__image popup__image--missing" role="img" aria-label="{IMAGE_UNAVAILABLE_TEXT}">{IMAGE_UNAVAILABLE_TEXT}</div>"#
            ),
        };
        format!(
            concat!(
                r#"<div class="popup">"#,
                "<h3>{title}</h3>",
                "<p><strong>Região:</strong> {region} — <strong>Língua:</strong> {language}</p>",
                "<p>{body}</p>",
                "{image}",
                r#"<p><button type="button" class="{class}" {attr}="{name}">Abrir galeria</button></p>"#,
                "</div>",
            ),
            title = escape_html(&self.title),
            region = escape_html(&self.region),
            language = escape_html(&self.language),
            body = escape_html(&self.body),
            image = image,
            class = OPEN_GALLERY_CLASS,
            attr = OPEN_GALLERY_ATTR,
            name = escape_html(&self.open_name),
        )
    }
}

/// Escape text for element content and double- or single-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// REGISTRY
// =============================================================================

/// How [`MarkerRegistry::focus`] resolved its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    ByName,
    /// Compatibility path: matched by exact coordinates.
    ByPosition,
    NotFound,
}

/// Per-marker record bound to its entity key.
#[derive(Debug)]
struct PlacedMarker<M> {
    name: String,
    at: LatLng,
    handle: M,
}

/// Owns the map widget and the name → marker association.
pub struct MarkerRegistry<B: MapBackend> {
    map: B,
    placed: Vec<PlacedMarker<B::Marker>>,
    by_name: HashMap<String, usize>,
    diagnostics: Diagnostics,
}

impl<B: MapBackend> MarkerRegistry<B> {
    /// Set the default view and place one marker per entity.
    ///
    /// A marker the backend refuses is skipped and reported; the rest of the
    /// map still builds.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the initial view cannot be set, which
    /// means the map widget is unusable.
    pub fn build(mut map: B, dataset: &Dataset, diagnostics: Diagnostics) -> Result<Self, MapError> {
        map.set_view(LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON), DEFAULT_ZOOM)?;
        let mut registry = Self { map, placed: Vec::with_capacity(dataset.len()), by_name: HashMap::new(), diagnostics };
        for povo in dataset.iter() {
            registry.place(povo);
        }
        registry.diagnostics.record(DiagEvent::MapReady);
        registry.diagnostics.status(StatusKey::Map, "OK");
        Ok(registry)
    }

    fn place(&mut self, povo: &Povo) {
        let popup = PopupContent::for_povo(povo).to_html();
        match self.map.add_marker(povo.position(), &popup) {
            Ok(handle) => {
                let slot = self.placed.len();
                self.placed.push(PlacedMarker { name: povo.name.clone(), at: povo.position(), handle });
                self.by_name.insert(povo.name.clone(), slot);
                self.diagnostics.record(DiagEvent::MarkerPlaced {
                    name: povo.name.clone(),
                    lat: povo.lat,
                    lon: povo.lon,
                    has_image: povo.first_image().is_some(),
                });
            }
            Err(e) => {
                log::warn!("marker for {} not placed: {e}", povo.name);
                self.diagnostics.record(DiagEvent::MarkerSkipped { name: povo.name.clone(), reason: e.to_string() });
            }
        }
    }

    /// Number of distinct names with a registered marker.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Marker registered under `name`.
    #[must_use]
    pub fn marker(&self, name: &str) -> Option<&B::Marker> {
        self.by_name.get(name).and_then(|&i| self.placed.get(i)).map(|p| &p.handle)
    }

    #[must_use]
    pub fn map(&self) -> &B {
        &self.map
    }

    /// Re-center on an entity and open its popup.
    ///
    /// Resolution order: the name entry, then (compatibility shim) a marker
    /// at exactly `fallback`, then nothing.
    pub fn focus(&mut self, name: &str, fallback: Option<LatLng>) -> FocusOutcome {
        let (slot, outcome) = if let Some(&slot) = self.by_name.get(name) {
            (slot, FocusOutcome::ByName)
        } else if let Some(slot) = fallback.and_then(|at| self.position_scan(at)) {
            (slot, FocusOutcome::ByPosition)
        } else {
            log::debug!("focus: no marker for {name}");
            self.diagnostics.record(DiagEvent::MarkerMissing { name: name.to_owned() });
            return FocusOutcome::NotFound;
        };

        let Some(placed) = self.placed.get(slot) else {
            return FocusOutcome::NotFound;
        };
        if let Err(e) = self.map.set_view(placed.at, FOCUS_ZOOM) {
            log::warn!("focus: set_view for {} failed: {e}", placed.name);
        }
        if let Err(e) = self.map.open_popup(&placed.handle) {
            log::warn!("focus: open_popup for {} failed: {e}", placed.name);
        }
        self.diagnostics.record(DiagEvent::MarkerFocused {
            name: placed.name.clone(),
            by_position: outcome == FocusOutcome::ByPosition,
        });
        outcome
    }

    // Exact comparison mirrors how coordinates were registered.
    #[allow(clippy::float_cmp)]
    fn position_scan(&self, at: LatLng) -> Option<usize> {
        self.placed.iter().position(|p| p.at.lat == at.lat && p.at.lon == at.lon)
    }
}
