//! Browser glue shared across client components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module adapts one browser capability to the trait `atlas` defines
//! for it, so components never touch `web_sys` or `js_sys` directly.

pub mod diagnostics;
pub mod dom;
pub mod leaflet;
pub mod storage;
