//! Reactive page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page` wraps the `atlas` view models in signals and exposes the actions
//! components trigger (focus a marker, open or close the gallery modal).

pub mod page;
