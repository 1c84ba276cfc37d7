//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one region of the page from the signals in
//! [`crate::state::page::PageModels`], provided through Leptos context, and
//! forwards user input back into the `atlas` view models.

pub mod commit_panel;
pub mod gallery_modal;
pub mod gallery_strip;
pub mod live_announcer;
pub mod map_view;
pub mod quiz_panel;
pub mod sidebar_list;
pub mod status_bar;
