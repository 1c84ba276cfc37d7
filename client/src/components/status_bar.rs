//! Debug status bar (`?debug=1`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the keyed status values the diagnostics sink publishes: dataset
//! size, image load counts, map state, quiz state. Purely observational.

use atlas::consts::DEBUG_BAR_ID;
use atlas::diagnostics::{StatusKey, StatusReadout};
use leptos::prelude::*;

#[component]
pub fn StatusBar() -> impl IntoView {
    let readout = expect_context::<RwSignal<StatusReadout>>();

    view! {
        <div id=DEBUG_BAR_ID class="debug-bar" aria-hidden="true">
            {StatusKey::ALL
                .iter()
                .map(|&key| {
                    view! {
                        <span class="debug-bar__item" data-key=key.as_str()>
                            {key.label()}
                            ": "
                            {move || readout.with(|r| r.display(key))}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
