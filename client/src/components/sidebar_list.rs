//! Sidebar list of every entity, keyboard-activatable.

use atlas::consts::SIDEBAR_LIST_ID;
use atlas::keys::is_activation_key;
use atlas::sidebar::SidebarRow;
use leptos::prelude::*;

use crate::state::page::PageModels;

/// One row per entity; activating a row focuses its map marker.
#[component]
pub fn SidebarList() -> impl IntoView {
    let models = expect_context::<PageModels>();
    let rows = models.sidebar.with_untracked(|s| s.rows().to_vec());

    view! {
        <ul id=SIDEBAR_LIST_ID class="people-list">
            {rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| view! { <SidebarItem index=index row=row/> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn SidebarItem(index: usize, row: SidebarRow) -> impl IntoView {
    let models = expect_context::<PageModels>();
    // Memoized so only an actual placeholder swap touches the DOM.
    let src = Memo::new(move |_| {
        models.sidebar.with(|s| s.rows().get(index).map(|r| r.thumb.src().to_owned()).unwrap_or_default())
    });

    let activate = move || {
        models.focus_row(index);
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            activate();
        }
    };
    let on_error = move |_| {
        models.ctx.with_value(|ctx| models.sidebar.update(|s| s.image_failed(index, &ctx.images, &ctx.diagnostics)));
    };
    let on_load = move |_| {
        models.ctx.with_value(|ctx| {
            models.sidebar.with_untracked(|s| s.image_loaded(index, &ctx.images, &ctx.diagnostics));
        });
    };

    view! {
        <li tabindex="0" role="button" on:click=move |_| activate() on:keydown=on_keydown>
            <img src=move || src.get() alt=format!("Imagem de {}", row.name) loading="lazy" on:error=on_error on:load=on_load/>
            <div>
                <strong>{row.name.clone()}</strong>
                <br/>
                <span class="muted">{row.region}</span>
            </div>
        </li>
    }
}
