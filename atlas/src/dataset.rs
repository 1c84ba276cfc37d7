//! Entity model, dataset parsing, and the one-shot async loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dataset is fetched exactly once at startup. Every view receives the
//! same [`Dataset`] (a cheap `Arc` clone) and resolves cross-view lookups by
//! entity name, so a sidebar click and a modal open see the identical
//! `Arc<Povo>` instance.
//!
//! ERROR HANDLING
//! ==============
//! [`DatasetLoader::load`] never returns an error: any fetch or parse failure
//! becomes an empty dataset plus a `DatasetFailed` diagnostic event, and every
//! dependent view still initializes with zero entities.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;

use crate::diagnostics::{DiagEvent, Diagnostics, StatusKey};

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset source unavailable")]
    Unavailable,
}

// =============================================================================
// ENTITY
// =============================================================================

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One catalogued people/community. Field names follow the original
/// Portuguese data file; English names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Povo {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
    #[serde(rename = "regiao", alias = "region", default)]
    pub region: String,
    #[serde(rename = "lingua", alias = "language", default)]
    pub language: String,
    #[serde(rename = "resumo", alias = "summary", default)]
    pub summary: String,
    #[serde(rename = "curiosidade", alias = "trivia", default)]
    pub trivia: Option<String>,
    #[serde(rename = "imagens", alias = "images", default)]
    pub images: Vec<String>,
    #[serde(alias = "legenda", default)]
    pub caption: Option<String>,
    #[serde(alias = "credito", default)]
    pub credit: Option<String>,
}

impl Povo {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }

    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Popup body text: trivia where present, otherwise the summary.
    #[must_use]
    pub fn blurb(&self) -> &str {
        self.trivia.as_deref().unwrap_or(&self.summary)
    }

    /// Trim text fields and drop blank images/optionals. Returns `None` when
    /// the entity has no usable name.
    fn normalize(mut self) -> Option<Self> {
        self.name = self.name.trim().to_owned();
        if self.name.is_empty() {
            return None;
        }
        self.region = self.region.trim().to_owned();
        self.language = self.language.trim().to_owned();
        self.summary = self.summary.trim().to_owned();
        self.trivia = non_blank(self.trivia);
        self.caption = non_blank(self.caption);
        self.credit = non_blank(self.credit);
        self.images = self
            .images
            .into_iter()
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .collect();
        Some(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

// =============================================================================
// DATASET
// =============================================================================

/// Aggregate counters shown by the status readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub entities: usize,
    pub expected_images: usize,
}

impl DatasetStats {
    /// Status bar text for the `data` slot.
    #[must_use]
    pub fn status_text(&self) -> String {
        format!("{} povos; {} imagens esperadas", self.entities, self.expected_images)
    }
}

/// What normalization discarded or collapsed while building a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// `(index in source list, reason)` for each dropped entry.
    pub dropped: Vec<(usize, String)>,
    /// Names that appeared more than once; the last entry owns the name.
    pub duplicates: Vec<String>,
}

#[derive(Debug, Default)]
struct DatasetInner {
    povos: Vec<Arc<Povo>>,
    by_name: HashMap<String, usize>,
}

/// Read-only, ordered entity list with a name index. Cloning shares storage.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    inner: Arc<DatasetInner>,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    povos: Vec<serde_json::Value>,
}

impl Dataset {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-decoded entities (normalized, last name wins).
    #[must_use]
    pub fn from_povos(povos: Vec<Povo>) -> Self {
        Self::build(povos.into_iter().map(Ok).collect()).0
    }

    /// Parse a `{ "povos": [...] }` document.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] when the document itself is not valid
    /// JSON of that shape. Individual malformed entries are dropped instead.
    pub fn parse_json(raw: &str) -> Result<Self, DatasetError> {
        Self::parse_with_report(raw).map(|(dataset, _)| dataset)
    }

    /// Like [`Dataset::parse_json`], also returning what was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] on an invalid document.
    pub fn parse_with_report(raw: &str) -> Result<(Self, LoadReport), DatasetError> {
        let doc: Document = serde_json::from_str(raw)?;
        let entries = doc
            .povos
            .into_iter()
            .map(|value| serde_json::from_value::<Povo>(value).map_err(|e| e.to_string()))
            .collect();
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<Result<Povo, String>>) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut inner = DatasetInner::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let povo = match entry {
                Ok(povo) => povo,
                Err(reason) => {
                    report.dropped.push((index, reason));
                    continue;
                }
            };
            let Some(povo) = povo.normalize() else {
                report.dropped.push((index, "empty name".to_owned()));
                continue;
            };
            let slot = inner.povos.len();
            if inner.by_name.insert(povo.name.clone(), slot).is_some() {
                report.duplicates.push(povo.name.clone());
            }
            inner.povos.push(Arc::new(povo));
        }
        (Self { inner: Arc::new(inner) }, report)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.povos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.povos.is_empty()
    }

    /// Entities in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Povo>> {
        self.inner.povos.iter()
    }

    /// Entity names in dataset order (duplicates included).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.povos.iter().map(|p| p.name.as_str())
    }

    /// Entity owning `name` (the last one registered under it).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Povo>> {
        self.inner.by_name.get(name).and_then(|&i| self.inner.povos.get(i))
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            entities: self.len(),
            expected_images: self.iter().map(|p| p.images.len()).sum(),
        }
    }

    /// True when both handles share the same underlying storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// LOADER
// =============================================================================

/// Where the raw dataset document comes from (HTTP in the browser).
pub trait DatasetSource {
    fn fetch(&self) -> impl Future<Output = Result<String, DatasetError>>;
}

/// Fetches, parses, and normalizes the dataset once.
pub struct DatasetLoader<S> {
    source: S,
    diagnostics: Diagnostics,
}

impl<S: DatasetSource> DatasetLoader<S> {
    pub fn new(source: S, diagnostics: Diagnostics) -> Self {
        Self { source, diagnostics }
    }

    /// Retrieve the dataset. Failures degrade to [`Dataset::empty`].
    pub async fn load(&self) -> Dataset {
        let parsed = match self.source.fetch().await {
            Ok(raw) => Dataset::parse_with_report(&raw),
            Err(e) => Err(e),
        };
        match parsed {
            Ok((dataset, report)) => {
                self.report(&report);
                let stats = dataset.stats();
                log::debug!("dataset loaded: {stats:?}");
                self.diagnostics.record(DiagEvent::DatasetLoaded {
                    entities: stats.entities,
                    expected_images: stats.expected_images,
                });
                self.diagnostics.status(StatusKey::Data, &stats.status_text());
                dataset
            }
            Err(e) => {
                log::error!("dataset load failed: {e}");
                self.diagnostics.record(DiagEvent::DatasetFailed { reason: e.to_string() });
                self.diagnostics.status(StatusKey::Data, &DatasetStats::default().status_text());
                Dataset::empty()
            }
        }
    }

    fn report(&self, report: &LoadReport) {
        for (index, reason) in &report.dropped {
            log::warn!("dataset entry #{index} dropped: {reason}");
            self.diagnostics.record(DiagEvent::EntityDropped { index: *index, reason: reason.clone() });
        }
        for name in &report.duplicates {
            log::warn!("duplicate entity name '{name}', last entry wins");
            self.diagnostics.record(DiagEvent::DuplicateName { name: name.clone() });
        }
    }
}
