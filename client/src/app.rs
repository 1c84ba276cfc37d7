//! Root application component and the page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`App`] owns the page-wide signals (status readout, live region, load
//! state), kicks off the one dataset fetch, and renders [`AtlasPage`] once
//! the dataset resolves. An empty dataset still renders the whole page: the
//! lists are empty and the quiz and commit form keep working.

use atlas::config::AtlasConfig;
use atlas::context::AppContext;
use atlas::dataset::DatasetLoader;
use atlas::diagnostics::{Diagnostics, StatusReadout};
use atlas::live::LiveRegion;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    commit_panel::CommitPanel, gallery_modal::GalleryModal, gallery_strip::GalleryStrip,
    live_announcer::LiveAnnouncer, map_view::MapView, quiz_panel::QuizPanel, sidebar_list::SidebarList,
    status_bar::StatusBar,
};
use crate::net::api::HttpSource;
use crate::state::page::{LoadState, PageModels};
use crate::util::diagnostics::SignalSink;
use crate::util::storage::page_store;

/// Root application component.
#[component]
pub fn App(config: AtlasConfig) -> impl IntoView {
    provide_meta_context();

    let readout = RwSignal::new(StatusReadout::default());
    let live = RwSignal::new(LiveRegion::default());
    let load = RwSignal::new(LoadState::Loading);
    provide_context(readout);
    provide_context(live);

    let status_bar = config.status_bar;
    let diagnostics = Diagnostics::new(SignalSink::new(readout, config.verbose));
    leptos::task::spawn_local(async move {
        let source = HttpSource::new(config.dataset_url.clone());
        let dataset = DatasetLoader::new(source, diagnostics.clone()).load().await;
        let ctx = AppContext::new(config, dataset, page_store(), diagnostics);
        load.set(LoadState::Ready(ctx));
    });

    view! {
        <Title text="Povos do Brasil"/>
        <header class="site-header">
            <h1>"Povos do Brasil"</h1>
            <p class="muted">"Mapa, galeria e quiz sobre povos indígenas brasileiros."</p>
        </header>
        <LiveAnnouncer/>
        {move || match load.get() {
            LoadState::Loading => view! { <p class="note" role="status">"Carregando dados…"</p> }.into_any(),
            LoadState::Ready(ctx) => view! { <AtlasPage ctx=ctx/> }.into_any(),
        }}
        <Show when=move || status_bar>
            <StatusBar/>
        </Show>
    }
}

/// Everything that needs the loaded dataset.
#[component]
fn AtlasPage(ctx: AppContext) -> impl IntoView {
    let live = expect_context::<RwSignal<LiveRegion>>();
    let models = PageModels::new(&ctx, live);
    provide_context(models);

    // Map popups are raw HTML owned by Leaflet; their open-gallery buttons
    // are handled here by delegation.
    #[cfg(feature = "csr")]
    {
        let popups = window_event_listener(leptos::ev::click, move |ev| {
            if let Some(name) = crate::util::dom::open_gallery_target(&ev) {
                ev.prevent_default();
                models.open_gallery(&name, crate::util::dom::FocusReturn::capture());
            }
        });
        on_cleanup(move || popups.remove());
    }

    view! {
        <main class="layout">
            <section class="map-section" aria-labelledby="map-title">
                <h2 id="map-title" class="sr-only">"Mapa"</h2>
                <MapView/>
            </section>
            <aside class="sidebar" aria-labelledby="people-title">
                <h2 id="people-title">"Povos"</h2>
                <SidebarList/>
            </aside>
        </main>
        <section class="panel" aria-labelledby="gallery-title">
            <h2 id="gallery-title">"Galeria"</h2>
            <GalleryStrip/>
        </section>
        <section class="panel" aria-labelledby="quiz-title">
            <h2 id="quiz-title">"Quiz"</h2>
            <QuizPanel/>
        </section>
        <section class="panel" aria-labelledby="commit-title">
            <h2 id="commit-title">"Compromissos"</h2>
            <CommitPanel/>
        </section>
        <GalleryModal/>
    }
}
