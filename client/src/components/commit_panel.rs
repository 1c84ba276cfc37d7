//! Commit notes form and list.

use atlas::commits::CommitLog;
use atlas::consts::{COMMIT_FORM_ID, COMMIT_INPUT_ID, COMMIT_LIST_ID};
use leptos::prelude::*;

use crate::state::page::PageModels;

/// Free-text commitments, newest first, persisted across visits.
#[component]
pub fn CommitPanel() -> impl IntoView {
    let models = expect_context::<PageModels>();
    let commits = models.commits;
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };
        let text = input.value();
        let mut live = models.live.get_untracked();
        let submitted = models.ctx.with_value(|ctx| commits.try_update(|c| c.submit(&text, &ctx.store, &mut live)));
        match submitted {
            Some(Ok(())) => {
                models.live.set(live);
                input.set_value("");
            }
            Some(Err(e)) => log::debug!("[vt] commit not submitted: {e}"),
            None => {}
        }
    };
    let on_clear = move |_| {
        models.ctx.with_value(|ctx| commits.update(|c| c.clear(&ctx.store)));
    };

    view! {
        <form id=COMMIT_FORM_ID class="commit-form" on:submit=on_submit>
            <label for=COMMIT_INPUT_ID>"Seu compromisso com os povos indígenas"</label>
            <textarea id=COMMIT_INPUT_ID node_ref=input_ref rows="3" placeholder="Escreva um compromisso…"></textarea>
            <div class="commit-actions">
                <button type="submit">"Enviar"</button>
                <button type="button" disabled=move || !commits.with(CommitLog::can_clear) on:click=on_clear>
                    "Limpar lista"
                </button>
            </div>
        </form>
        <ul id=COMMIT_LIST_ID class="commit-list" aria-label="Compromissos enviados">
            {move || {
                commits.with(|c| c.notes().to_vec()).into_iter().map(|note| view! { <li>{note}</li> }).collect_view()
            }}
        </ul>
    }
}
