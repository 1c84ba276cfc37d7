//! Gallery modal: every image of one entity plus caption and credit.
//!
//! DESIGN
//! ======
//! A single dialog instance is always in the DOM and toggled by the
//! `atlas` modal state. Opening moves focus to the close button; closing by
//! button, backdrop click, or Escape gives focus back to whatever opened it.

use atlas::consts::{MODAL_CAPTION_ID, MODAL_CLOSE_ID, MODAL_GALLERY_ID, MODAL_ID};
use atlas::keys::is_cancel_key;
use atlas::modal::{CloseTrigger, ModalDialog};
use leptos::prelude::*;

use crate::state::page::PageModels;

#[component]
pub fn GalleryModal() -> impl IntoView {
    let models = expect_context::<PageModels>();
    let close_ref = NodeRef::<leptos::html::Button>::new();

    // Entity on display and its image count; image swaps do not change it.
    let shown = Memo::new(move |_| {
        models.modal.with(|m| m.current().map(|open| (open.name().to_owned(), open.images.len())))
    });
    let is_open = move || shown.with(Option::is_some);

    Effect::new(move |_| {
        if shown.with(Option::is_some) {
            if let Some(button) = close_ref.get() {
                if let Err(e) = button.focus() {
                    log::warn!("[vt] could not focus modal close button: {e:?}");
                }
            }
        }
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_cancel_key(&ev.key()) && models.modal.with_untracked(ModalDialog::is_open) {
            ev.prevent_default();
            models.close_gallery(CloseTrigger::CancelKey);
        }
    });
    on_cleanup(move || escape.remove());

    let caption = move || models.modal.with(|m| m.current().map(|open| open.caption.clone()).unwrap_or_default());
    let images = move || {
        shown.get().map(|(name, count)| {
            (0..count).map(|index| view! { <ModalImage index=index alt=name.clone()/> }).collect_view()
        })
    };

    view! {
        <div
            id=MODAL_ID
            class="modal"
            class:open=is_open
            role="dialog"
            aria-modal="true"
            aria-labelledby=MODAL_CAPTION_ID
            aria-hidden=move || (!is_open()).to_string()
            on:click=move |_| models.close_gallery(CloseTrigger::Backdrop)
        >
            <div class="modal-content" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <button
                    id=MODAL_CLOSE_ID
                    class="modal-close"
                    type="button"
                    aria-label="Fechar galeria"
                    node_ref=close_ref
                    on:click=move |_| models.close_gallery(CloseTrigger::CloseButton)
                >
                    "✕"
                </button>
                <div id=MODAL_GALLERY_ID class="modal-gallery">
                    {images}
                </div>
                <p id=MODAL_CAPTION_ID class="modal-caption">
                    {caption}
                </p>
            </div>
        </div>
    }
}

#[component]
fn ModalImage(index: usize, alt: String) -> impl IntoView {
    let models = expect_context::<PageModels>();
    let src = Memo::new(move |_| {
        models
            .modal
            .with(|m| m.current().and_then(|open| open.images.get(index)).map(|slot| slot.src().to_owned()))
            .unwrap_or_default()
    });

    let on_error = move |_| {
        models.ctx.with_value(|ctx| {
            models.modal.update(|m| {
                m.image_failed(index, &ctx.images);
            });
        });
    };
    let on_load = move |_| {
        models.ctx.with_value(|ctx| models.modal.with_untracked(|m| m.image_loaded(index, &ctx.images)));
    };

    view! { <img src=move || src.get() alt=alt loading="lazy" on:error=on_error on:load=on_load/> }
}
