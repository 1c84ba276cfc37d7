//! # client
//!
//! Leptos + WASM front-end for the Povos atlas page.
//!
//! All interactive state lives in the `atlas` crate; this crate renders it and
//! binds the browser capabilities `atlas` abstracts over: HTTP fetch for the
//! dataset, `localStorage` for persistence, Leaflet for the map, and the
//! console for diagnostics. Browser glue compiles only with the `csr`
//! feature; native builds keep the pure helpers so they can be unit-tested.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: read the query string, install logging, mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let config = atlas::config::AtlasConfig::from_query(&util::dom::location_search());
    util::diagnostics::init_logging(config.verbose);
    log::debug!("[vt] starting with {config:?}");
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config/> });
}
