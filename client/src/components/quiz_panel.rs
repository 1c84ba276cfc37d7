//! Quiz panel: question, labeled options, feedback, final score.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is driven by a [`QuizSnapshot`] taken from the engine on every
//! change, so the view never holds a borrow of engine state. Announcements
//! go through the shared live region.

#[cfg(test)]
#[path = "quiz_panel_test.rs"]
mod quiz_panel_test;

use atlas::consts::QUIZ_ROOT_ID;
use atlas::quiz::{OptionState, QuizEngine, QuizPhase, QuizResult};
use leptos::prelude::*;

use crate::state::page::PageModels;

/// Owned view of the engine for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub position: String,
    pub prompt: String,
    pub options: Vec<(String, OptionState)>,
    pub phase: QuizPhase,
}

pub fn snapshot(quiz: &QuizEngine) -> QuizSnapshot {
    let (prompt, options) = match quiz.current() {
        Some(question) => {
            let options = (0..question.options().len())
                .map(|i| (question.labeled(i).unwrap_or_default(), quiz.option_state(i)))
                .collect();
            (question.prompt().to_owned(), options)
        }
        None => (String::new(), Vec::new()),
    };
    QuizSnapshot {
        position: format!("Pergunta {} de {}", quiz.index() + 1, quiz.total()),
        prompt,
        options,
        phase: quiz.phase(),
    }
}

pub fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Enabled | OptionState::Disabled => "quiz-option",
        OptionState::Correct => "quiz-option quiz-option--correct",
        OptionState::Wrong => "quiz-option quiz-option--wrong",
    }
}

pub fn result_text(result: &QuizResult) -> String {
    let mut text = format!("Fim! Sua pontuação: {}/{}.", result.score, result.total);
    if result.new_record {
        text.push_str(" Novo recorde!");
    }
    text
}

pub fn best_text(best: u32) -> String {
    if best == 0 { "Sem recorde salvo.".to_owned() } else { format!("Melhor pontuação: {best}") }
}

#[component]
pub fn QuizPanel() -> impl IntoView {
    let models = expect_context::<PageModels>();
    let quiz = models.quiz;

    let answer = move |option: usize| {
        let mut live = models.live.get_untracked();
        match quiz.try_update(|q| q.answer(option, &mut live)) {
            Some(Ok(_)) => models.live.set(live),
            Some(Err(e)) => log::debug!("[vt] quiz answer ignored: {e}"),
            None => {}
        }
    };
    let next = move |_| {
        let mut live = models.live.get_untracked();
        let advanced = models.ctx.with_value(|ctx| quiz.try_update(|q| q.advance(&ctx.store, &mut live)));
        match advanced {
            Some(Ok(phase)) => {
                models.live.set(live);
                if matches!(phase, QuizPhase::Finished(_)) {
                    models.sync_best();
                }
            }
            Some(Err(e)) => log::debug!("[vt] quiz advance ignored: {e}"),
            None => {}
        }
    };
    let restart = move |_| quiz.update(QuizEngine::restart);
    let clear_best = move |_| {
        models.ctx.with_value(|ctx| QuizEngine::clear_best(&ctx.store));
        models.sync_best();
    };
    let cannot_clear = move || {
        models.best.track();
        !models.ctx.with_value(|ctx| QuizEngine::can_clear_best(&ctx.store))
    };

    let body = move || {
        let view_state = quiz.with(snapshot);
        match view_state.phase {
            QuizPhase::Finished(result) => view! { <p class="quiz-result">{result_text(&result)}</p> }.into_any(),
            phase => {
                let in_feedback = matches!(phase, QuizPhase::Feedback { .. });
                view! {
                    <p class="quiz-position">{view_state.position}</p>
                    <div class="quiz-question">{view_state.prompt}</div>
                    <div class="quiz-options" role="group">
                        {view_state
                            .options
                            .into_iter()
                            .enumerate()
                            .map(|(index, (label, state))| {
                                view! {
                                    <button
                                        type="button"
                                        class=option_class(state)
                                        disabled=state != OptionState::Enabled
                                        on:click=move |_| answer(index)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Show when=move || in_feedback>
                        <button type="button" class="quiz-next" on:click=next>
                            "Próxima"
                        </button>
                    </Show>
                }
                .into_any()
            }
        }
    };

    view! {
        <div id=QUIZ_ROOT_ID class="quiz">
            {body}
            <p class="quiz-best muted">{move || best_text(models.best.get())}</p>
            <div class="quiz-actions">
                <button type="button" on:click=restart>
                    "Recomeçar"
                </button>
                <button type="button" disabled=cannot_clear on:click=clear_best>
                    "Apagar recorde"
                </button>
            </div>
        </div>
    }
}
