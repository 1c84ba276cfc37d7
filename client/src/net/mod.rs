//! Network access for the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page makes exactly one request: the dataset document. `api` adapts it
//! to [`atlas::dataset::DatasetSource`].

pub mod api;
