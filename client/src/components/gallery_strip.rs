//! Thumbnail gallery for the first few entities.

use atlas::consts::GALLERY_ID;
use atlas::keys::is_activation_key;
use leptos::prelude::*;

use crate::state::page::PageModels;
use crate::util::dom::FocusReturn;

/// Bounded preview set. Activating a thumbnail announces the entity; its
/// button opens the modal for the same entity.
#[component]
pub fn GalleryStrip() -> impl IntoView {
    let models = expect_context::<PageModels>();
    let names: Vec<String> = models.gallery.with_untracked(|g| g.thumbnails().iter().map(|t| t.name.clone()).collect());

    view! {
        <div id=GALLERY_ID class="gallery-grid" role="list">
            {names
                .into_iter()
                .enumerate()
                .map(|(index, name)| view! { <GalleryItem index=index name=name/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn GalleryItem(index: usize, name: String) -> impl IntoView {
    let models = expect_context::<PageModels>();
    let src = Memo::new(move |_| {
        models.gallery.with(|g| g.thumbnails().get(index).map(|t| t.slot.src().to_owned()).unwrap_or_default())
    });

    let announce = move || {
        let mut live = models.live.get_untracked();
        if models.gallery.with_untracked(|g| g.activate(index, &mut live)) {
            models.live.set(live);
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            announce();
        }
    };
    let on_error = move |_| {
        models.ctx.with_value(|ctx| models.gallery.update(|g| g.image_failed(index, &ctx.images, &ctx.diagnostics)));
    };
    let on_load = move |_| {
        models.ctx.with_value(|ctx| {
            models.gallery.with_untracked(|g| g.image_loaded(index, &ctx.images, &ctx.diagnostics));
        });
    };
    let open_name = name.clone();
    let on_open = move |_| {
        models.open_gallery(&open_name, FocusReturn::capture());
    };

    view! {
        <figure class="thumb" role="listitem">
            <img
                src=move || src.get()
                alt=name.clone()
                tabindex="0"
                loading="lazy"
                on:click=move |_| announce()
                on:keydown=on_keydown
                on:error=on_error
                on:load=on_load
            />
            <figcaption>{name.clone()}</figcaption>
            <button type="button" class="thumb__open" aria-label=format!("Abrir galeria de {name}") on:click=on_open>
                "Ver galeria"
            </button>
        </figure>
    }
}
