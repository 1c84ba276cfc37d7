use std::sync::Arc;

use super::*;
use crate::diagnostics::MemorySink;

fn engine() -> QuizEngine {
    QuizEngine::with_default_questions(Diagnostics::noop())
}

/// Answer every question with the given options, advancing after each.
fn play(quiz: &mut QuizEngine, store: &PersistenceStore, picks: &[usize]) -> QuizPhase {
    let mut live = LiveRegion::default();
    let mut phase = quiz.phase();
    for &pick in picks {
        quiz.answer(pick, &mut live).unwrap();
        phase = quiz.advance(store, &mut live).unwrap();
    }
    phase
}

// =============================================================
// Question validation
// =============================================================

#[test]
fn question_requires_two_or_three_options() {
    let one = vec!["a".to_owned()];
    let four: Vec<String> = ["a", "b", "c", "d"].map(str::to_owned).to_vec();
    assert_eq!(Question::new("?", one, 0), Err(QuizError::InvalidQuestion));
    assert_eq!(Question::new("?", four, 0), Err(QuizError::InvalidQuestion));
    assert!(Question::new("?", vec!["a".to_owned(), "b".to_owned()], 1).is_ok());
}

#[test]
fn question_rejects_correct_index_out_of_range() {
    let opts = vec!["a".to_owned(), "b".to_owned()];
    assert_eq!(Question::new("?", opts, 2), Err(QuizError::InvalidQuestion));
}

#[test]
fn empty_bank_is_rejected() {
    assert_eq!(QuizEngine::new(Vec::new(), Diagnostics::noop()).unwrap_err(), QuizError::EmptyBank);
}

#[test]
fn labels_use_letters() {
    let q = &default_questions()[0];
    assert_eq!(q.labeled(1).as_deref(), Some("B) Guarani"));
    assert_eq!(q.labeled(3), None);
}

#[test]
fn engine_reports_quiz_ready() {
    let sink = Arc::new(MemorySink::default());
    let quiz = QuizEngine::with_default_questions(Diagnostics::from_arc(sink.clone()));
    assert_eq!(quiz.total(), 3);
    assert_eq!(sink.readout().get(StatusKey::Quiz), Some("OK"));
}

// =============================================================
// Answering
// =============================================================

#[test]
fn correct_answer_announces_and_scores() {
    let mut quiz = engine();
    let mut live = LiveRegion::default();
    assert_eq!(quiz.answer(1, &mut live), Ok(true));
    assert_eq!(live.message(), "Correto! A resposta é B) Guarani.");
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.phase(), QuizPhase::Feedback { chosen: 1, correct: true });
}

#[test]
fn wrong_answer_names_right_option() {
    let mut quiz = engine();
    let mut live = LiveRegion::default();
    assert_eq!(quiz.answer(0, &mut live), Ok(false));
    assert_eq!(live.message(), "Incorreto. A resposta certa é B) Guarani.");
    assert_eq!(quiz.score(), 0);
}

#[test]
fn second_answer_during_feedback_is_rejected() {
    let mut quiz = engine();
    let mut live = LiveRegion::default();
    quiz.answer(1, &mut live).unwrap();
    assert_eq!(quiz.answer(1, &mut live), Err(QuizError::WrongPhase));
    assert_eq!(quiz.score(), 1);
}

#[test]
fn out_of_range_option_is_rejected() {
    let mut quiz = engine();
    let mut live = LiveRegion::default();
    assert_eq!(quiz.answer(3, &mut live), Err(QuizError::OptionOutOfRange(3)));
    assert_eq!(quiz.phase(), QuizPhase::Presenting);
}

#[test]
fn advance_requires_feedback() {
    let mut quiz = engine();
    let store = PersistenceStore::in_memory();
    assert_eq!(quiz.advance(&store, &mut LiveRegion::default()), Err(QuizError::WrongPhase));
}

#[test]
fn option_states_follow_phase() {
    let mut quiz = engine();
    assert_eq!(quiz.option_state(0), OptionState::Enabled);
    quiz.answer(2, &mut LiveRegion::default()).unwrap();
    assert_eq!(quiz.option_state(0), OptionState::Disabled);
    assert_eq!(quiz.option_state(1), OptionState::Correct);
    assert_eq!(quiz.option_state(2), OptionState::Wrong);
}

// =============================================================
// Finishing and best score
// =============================================================

#[test]
fn mixed_run_scores_two_of_three() {
    let mut quiz = engine();
    let store = PersistenceStore::in_memory();
    let phase = play(&mut quiz, &store, &[1, 0, 0]);
    assert_eq!(phase, QuizPhase::Finished(QuizResult { score: 2, total: 3, best: 2, new_record: true }));
    assert!(quiz.current().is_none());
    assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("2"));
}

#[test]
fn best_only_grows() {
    let store = PersistenceStore::in_memory();
    let mut quiz = engine();
    play(&mut quiz, &store, &[1, 0, 0]);
    quiz.restart();
    let phase = play(&mut quiz, &store, &[1, 0, 1]);
    assert_eq!(phase, QuizPhase::Finished(QuizResult { score: 1, total: 3, best: 2, new_record: false }));
    quiz.restart();
    play(&mut quiz, &store, &[1, 1, 0]);
    assert_eq!(best_score(&store), 3);
}

#[test]
fn finish_announces_record_or_existing_best() {
    let store = PersistenceStore::in_memory();
    store.set(BEST_SCORE_KEY, "3");
    let mut quiz = engine();
    let mut live = LiveRegion::default();
    for pick in [1, 1, 0] {
        quiz.answer(pick, &mut live).unwrap();
        quiz.advance(&store, &mut live).unwrap();
    }
    assert_eq!(live.message(), "Fim! Sua pontuação: 3/3. Recorde: 3.");

    QuizEngine::clear_best(&store);
    quiz.restart();
    for pick in [1, 0, 0] {
        quiz.answer(pick, &mut live).unwrap();
        quiz.advance(&store, &mut live).unwrap();
    }
    assert_eq!(live.message(), "Fim! Sua pontuação: 2/3. Novo recorde!");
}

#[test]
fn clear_best_resets_prior_to_zero() {
    let store = PersistenceStore::in_memory();
    store.set(BEST_SCORE_KEY, "3");
    assert!(QuizEngine::can_clear_best(&store));
    QuizEngine::clear_best(&store);
    assert!(!QuizEngine::can_clear_best(&store));
    assert_eq!(best_score(&store), 0);
}

#[test]
fn corrupt_best_reads_as_zero() {
    let store = PersistenceStore::in_memory();
    store.set(BEST_SCORE_KEY, "muitos");
    assert_eq!(best_score(&store), 0);
}

#[test]
fn restart_resets_session_state() {
    let mut quiz = engine();
    let store = PersistenceStore::in_memory();
    play(&mut quiz, &store, &[1, 1, 0]);
    quiz.restart();
    assert_eq!((quiz.index(), quiz.score(), quiz.phase()), (0, 0, QuizPhase::Presenting));
    assert_eq!(quiz.current().map(Question::prompt), Some("Qual povo fala língua Tupi-Guarani?"));
}

#[test]
fn finish_is_recorded() {
    let sink = Arc::new(MemorySink::default());
    let mut quiz = QuizEngine::with_default_questions(Diagnostics::from_arc(sink.clone()));
    play(&mut quiz, &PersistenceStore::in_memory(), &[0, 0, 1]);
    assert!(sink.events().contains(&DiagEvent::QuizFinished { score: 0, total: 3, new_record: false }));
}
