//! Diagnostics sink, status readout, and shared image counters.
//!
//! DESIGN
//! ======
//! Components never reach into ambient global state to report what they are
//! doing. They call through a [`Diagnostics`] handle that wraps an injectable
//! [`DiagnosticsSink`]. The sink observes; it never drives core behavior, so
//! [`Diagnostics::noop`] is always a valid choice (tests, embeds without a
//! status bar).

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

// =============================================================================
// STATUS KEYS
// =============================================================================

/// Keyed slots of the debug status bar (`span[data-key]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKey {
    Data,
    Images,
    Map,
    Quiz,
}

impl StatusKey {
    pub const ALL: [Self; 4] = [Self::Data, Self::Images, Self::Map, Self::Quiz];

    /// Value of the `data-key` attribute for this slot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Images => "images",
            Self::Map => "map",
            Self::Quiz => "quiz",
        }
    }

    /// Human label rendered before the value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Data => "dados",
            Self::Images => "imagens",
            Self::Map => "mapa",
            Self::Quiz => "quiz",
        }
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Something a component did that is worth observing.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagEvent {
    DatasetLoaded { entities: usize, expected_images: usize },
    DatasetFailed { reason: String },
    EntityDropped { index: usize, reason: String },
    DuplicateName { name: String },
    MapReady,
    MapUnavailable { reason: String },
    MarkerPlaced { name: String, lat: f64, lon: f64, has_image: bool },
    MarkerSkipped { name: String, reason: String },
    MarkerFocused { name: String, by_position: bool },
    MarkerMissing { name: String },
    SidebarRowAdded { name: String },
    ThumbnailAdded { name: String, src: String },
    ImageLoaded { src: String },
    ImageFailed { name: String, src: String },
    ModalOpened { name: String, images: usize },
    ModalClosed,
    QuizFinished { score: u32, total: u32, new_record: bool },
    CommitSubmitted { total: usize },
}

impl DiagEvent {
    /// Failure events are logged even when verbose logging is off.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::DatasetFailed { .. }
                | Self::EntityDropped { .. }
                | Self::DuplicateName { .. }
                | Self::MapUnavailable { .. }
                | Self::MarkerSkipped { .. }
                | Self::ImageFailed { .. }
        )
    }
}

impl fmt::Display for DiagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetLoaded { entities, expected_images } => {
                write!(f, "dataset: {entities} povos, {expected_images} images expected")
            }
            Self::DatasetFailed { reason } => write!(f, "dataset failed: {reason}"),
            Self::EntityDropped { index, reason } => write!(f, "entity #{index} dropped: {reason}"),
            Self::DuplicateName { name } => write!(f, "duplicate name '{name}', last entry wins"),
            Self::MapReady => f.write_str("map: ready"),
            Self::MapUnavailable { reason } => write!(f, "map unavailable: {reason}"),
            Self::MarkerPlaced { name, lat, lon, has_image } => {
                write!(f, "marker: {name} @ {lat},{lon} (img:{has_image})")
            }
            Self::MarkerSkipped { name, reason } => write!(f, "marker skipped for {name}: {reason}"),
            Self::MarkerFocused { name, by_position } => {
                let via = if *by_position { "position" } else { "name" };
                write!(f, "marker focused: {name} (by {via})")
            }
            Self::MarkerMissing { name } => write!(f, "no marker for {name}"),
            Self::SidebarRowAdded { name } => write!(f, "sidebar item added: {name}"),
            Self::ThumbnailAdded { name, src } => write!(f, "gallery thumb added for {name} {src}"),
            Self::ImageLoaded { src } => write!(f, "image loaded: {src}"),
            Self::ImageFailed { name, src } => write!(f, "image error: {src} for {name}"),
            Self::ModalOpened { name, images } => write!(f, "gallery opened for {name} ({images} images)"),
            Self::ModalClosed => f.write_str("gallery closed"),
            Self::QuizFinished { score, total, new_record } => {
                write!(f, "quiz finished: {score}/{total} (record:{new_record})")
            }
            Self::CommitSubmitted { total } => write!(f, "commit submitted, {total} stored"),
        }
    }
}

// =============================================================================
// SINK
// =============================================================================

/// Narrow capability components report through.
pub trait DiagnosticsSink {
    fn record(&self, event: &DiagEvent);
    fn update_status(&self, key: StatusKey, text: &str);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&self, _event: &DiagEvent) {}
    fn update_status(&self, _key: StatusKey, _text: &str) {}
}

/// Sink that keeps every event and the latest status values in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagEvent>>,
    readout: Mutex<StatusReadout>,
}

impl MemorySink {
    #[must_use]
    pub fn events(&self) -> Vec<DiagEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn readout(&self) -> StatusReadout {
        self.readout.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, event: &DiagEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }

    fn update_status(&self, key: StatusKey, text: &str) {
        self.readout.lock().unwrap_or_else(PoisonError::into_inner).set(key, text);
    }
}

/// Cloneable handle to the injected sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticsSink + Send + Sync>,
}

impl Diagnostics {
    pub fn new(sink: impl DiagnosticsSink + Send + Sync + 'static) -> Self {
        Self { sink: Arc::new(sink) }
    }

    #[must_use]
    pub fn from_arc(sink: Arc<dyn DiagnosticsSink + Send + Sync>) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn noop() -> Self {
        Self::new(NoopSink)
    }

    pub fn record(&self, event: DiagEvent) {
        self.sink.record(&event);
    }

    pub fn status(&self, key: StatusKey, text: &str) {
        self.sink.update_status(key, text);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

// =============================================================================
// STATUS READOUT
// =============================================================================

/// Latest text per status slot, as shown by the debug bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReadout {
    values: BTreeMap<StatusKey, String>,
}

impl StatusReadout {
    pub fn set(&mut self, key: StatusKey, text: &str) {
        self.values.insert(key, text.to_owned());
    }

    #[must_use]
    pub fn get(&self, key: StatusKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Display text for a slot, `—` while nothing was reported.
    #[must_use]
    pub fn display(&self, key: StatusKey) -> String {
        self.get(key).unwrap_or("—").to_owned()
    }
}

// =============================================================================
// IMAGE COUNTERS
// =============================================================================

/// Point-in-time copy of the image counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCounts {
    pub expected: usize,
    pub loaded: usize,
    pub failed: usize,
}

impl ImageCounts {
    /// Status bar text, e.g. `3/10 carregadas (1 falhas)`.
    #[must_use]
    pub fn status_text(&self) -> String {
        let base = format!("{}/{} carregadas", self.loaded, self.expected);
        if self.failed == 0 { base } else { format!("{base} ({} falhas)", self.failed) }
    }
}

#[derive(Debug, Default)]
struct ImageCounters {
    expected: AtomicUsize,
    loaded: AtomicUsize,
    failed: AtomicUsize,
}

/// Image load/failure counters shared by sidebar, gallery, and modal.
#[derive(Debug, Clone, Default)]
pub struct ImageStats {
    inner: Arc<ImageCounters>,
}

impl ImageStats {
    #[must_use]
    pub fn new(expected: usize) -> Self {
        let stats = Self::default();
        stats.inner.expected.store(expected, Ordering::Relaxed);
        stats
    }

    pub fn record_loaded(&self, src: &str, diagnostics: &Diagnostics) {
        self.inner.loaded.fetch_add(1, Ordering::Relaxed);
        diagnostics.record(DiagEvent::ImageLoaded { src: src.to_owned() });
        self.publish(diagnostics);
    }

    pub fn record_failed(&self, name: &str, src: &str, diagnostics: &Diagnostics) {
        self.inner.failed.fetch_add(1, Ordering::Relaxed);
        diagnostics.record(DiagEvent::ImageFailed { name: name.to_owned(), src: src.to_owned() });
        self.publish(diagnostics);
    }

    /// Push the current counter text to the `images` status slot.
    pub fn publish(&self, diagnostics: &Diagnostics) {
        diagnostics.status(StatusKey::Images, &self.snapshot().status_text());
    }

    #[must_use]
    pub fn snapshot(&self) -> ImageCounts {
        ImageCounts {
            expected: self.inner.expected.load(Ordering::Relaxed),
            loaded: self.inner.loaded.load(Ordering::Relaxed),
            failed: self.inner.failed.load(Ordering::Relaxed),
        }
    }
}
