//! State core for the Povos atlas page.
//!
//! This crate owns every piece of interactive state behind the page: the
//! dataset of peoples, the name-keyed marker registry, the sidebar and gallery
//! view models, the modal dialog lifecycle, the quiz, and the persisted commit
//! notes. It has no browser dependency. The `client` crate renders these models
//! with Leptos and plugs browser capabilities (fetch, `localStorage`, Leaflet)
//! into the traits defined here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dataset`] | Entity model, JSON parsing, normalization, async loader |
//! | [`persistence`] | Never-failing key-value store over a fallible backend |
//! | [`markers`] | Map backend seam, popup composition, name → marker registry |
//! | [`sidebar`] | One row per entity, activation routes to marker focus |
//! | [`gallery`] | Bounded thumbnail strip with announcements and failure counting |
//! | [`modal`] | Closed/Open dialog state machine with focus restoration |
//! | [`quiz`] | Question/feedback/finished state machine and best score |
//! | [`commits`] | Capped newest-first note list |
//! | [`diagnostics`] | Injectable diagnostics sink, status readout, image counters |
//! | [`image`] | Image slot with one-shot placeholder substitution |
//! | [`live`] | Accessible live-region announcements |
//! | [`keys`] | Activation and cancel key classification |
//! | [`context`] | Application context handed to every component |
//! | [`config`] | Query-string configuration |
//! | [`consts`] | Fixed defaults (map view, caps, storage keys, DOM ids) |

pub mod commits;
pub mod config;
pub mod consts;
pub mod context;
pub mod dataset;
pub mod diagnostics;
pub mod gallery;
pub mod image;
pub mod keys;
pub mod live;
pub mod markers;
pub mod modal;
pub mod persistence;
pub mod quiz;
pub mod sidebar;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;
