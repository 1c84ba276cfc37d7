//! Map region: Leaflet container plus the static fallback.

use atlas::consts::MAP_CONTAINER_ID;
use atlas::markers::MapStatus;
use leptos::prelude::*;

use crate::state::page::PageModels;
use crate::util::leaflet::LeafletMap;

/// Leaflet map with one marker per entity.
///
/// The map is created after the container mounts. If Leaflet never loaded,
/// the container is hidden and the fallback message takes its place.
#[component]
pub fn MapView() -> impl IntoView {
    let models = expect_context::<PageModels>();

    Effect::new(move |_| {
        if models.map_status.get_untracked() == MapStatus::Pending {
            models.install_map(LeafletMap::connect(MAP_CONTAINER_ID));
        }
    });

    let unavailable = move || models.map_status.with(|s| s.message().map(str::to_owned));

    view! {
        <div class="map-area">
            <div
                id=MAP_CONTAINER_ID
                class="map"
                class:map--hidden=move || unavailable().is_some()
                role="region"
                aria-label="Mapa dos povos"
            ></div>
            {move || unavailable().map(|message| view! { <p class="note" role="alert">{message}</p> })}
        </div>
    }
}
