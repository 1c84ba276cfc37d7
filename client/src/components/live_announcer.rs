//! Visually hidden `aria-live` region.

use atlas::consts::LIVE_REGION_ID;
use atlas::live::LiveRegion;
use leptos::prelude::*;

/// Renders the latest announcement. Each announcement replaces the inner
/// node, so a repeated message is read again.
#[component]
pub fn LiveAnnouncer() -> impl IntoView {
    let live = expect_context::<RwSignal<LiveRegion>>();

    view! {
        <div id=LIVE_REGION_ID class="sr-only" role="status" aria-live="polite" aria-atomic="true">
            {move || {
                live.with(|l| {
                    let seq = l.seq().to_string();
                    let message = l.message().to_owned();
                    view! { <span data-seq=seq>{message}</span> }
                })
            }}
        </div>
    }
}
