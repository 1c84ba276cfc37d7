//! Quiz engine: fixed question bank, per-question feedback, persisted best.
//!
//! SYSTEM CONTEXT
//! ==============
//! The quiz panel renders whatever [`QuizEngine::phase`] says and forwards
//! option clicks to [`QuizEngine::answer`] and the "next" button to
//! [`QuizEngine::advance`]. Score and position are session-local; only the
//! best score crosses sessions, through the [`PersistenceStore`].
//!
//! DESIGN
//! ======
//! ```text
//!   Presenting --answer(i)--> Feedback --advance--> Presenting (next question)
//!                                     \--advance--> Finished (last question)
//!   any phase --restart--> Presenting (question 0, score 0)
//! ```
//! A missing or unparsable stored best counts as 0, and only a strictly
//! greater score replaces it.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::consts::BEST_SCORE_KEY;
use crate::diagnostics::{DiagEvent, Diagnostics, StatusKey};
use crate::live::LiveRegion;
use crate::persistence::PersistenceStore;

/// Labels rendered before each option.
pub const OPTION_LABELS: [char; 3] = ['A', 'B', 'C'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("a question needs 2 or 3 options and a correct index among them")]
    InvalidQuestion,
    #[error("the question bank is empty")]
    EmptyBank,
    #[error("action not allowed in the current phase")]
    WrongPhase,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
}

// =============================================================================
// QUESTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidQuestion`] unless there are 2 or 3 options
    /// and `correct` indexes one of them.
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct: usize) -> Result<Self, QuizError> {
        if !(2..=OPTION_LABELS.len()).contains(&options.len()) || correct >= options.len() {
            return Err(QuizError::InvalidQuestion);
        }
        Ok(Self { prompt: prompt.into(), options, correct })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// "B) Guarani" style label, or `None` past the last option.
    #[must_use]
    pub fn labeled(&self, index: usize) -> Option<String> {
        let text = self.options.get(index)?;
        let letter = OPTION_LABELS.get(index)?;
        Some(format!("{letter}) {text}"))
    }
}

/// The three questions shipped with the page.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    fn q(prompt: &str, options: [&str; 3], correct: usize) -> Question {
        Question { prompt: prompt.to_owned(), options: options.map(str::to_owned).to_vec(), correct }
    }
    vec![
        q("Qual povo fala língua Tupi-Guarani?", ["Yanomami", "Guarani", "Tikuna"], 1),
        q("Qual região do Brasil tem povos amazônicos tradicionais?", ["Nordeste", "Norte", "Sul"], 1),
        q("Qual atividade é tradicional em muitas culturas indígenas?", ["Pintura corporal", "Surf", "Esqui"], 0),
    ]
}

// =============================================================================
// PHASES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    /// Best score after this run was taken into account.
    pub best: u32,
    pub new_record: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Presenting,
    Feedback { chosen: usize, correct: bool },
    Finished(QuizResult),
}

/// How one option button renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Enabled,
    Disabled,
    /// Disabled and marked as the right answer.
    Correct,
    /// Disabled and marked as the wrong answer the player chose.
    Wrong,
}

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    index: usize,
    score: u32,
    phase: QuizPhase,
    diagnostics: Diagnostics,
}

impl QuizEngine {
    /// # Errors
    ///
    /// Returns [`QuizError::EmptyBank`] when `questions` is empty.
    pub fn new(questions: Vec<Question>, diagnostics: Diagnostics) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        diagnostics.status(StatusKey::Quiz, "OK");
        Ok(Self { questions, index: 0, score: 0, phase: QuizPhase::Presenting, diagnostics })
    }

    #[must_use]
    pub fn with_default_questions(diagnostics: Diagnostics) -> Self {
        diagnostics.status(StatusKey::Quiz, "OK");
        Self { questions: default_questions(), index: 0, score: 0, phase: QuizPhase::Presenting, diagnostics }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Question on screen; `None` once finished.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished(_) => None,
            _ => self.questions.get(self.index),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Choose option `chosen` for the current question.
    ///
    /// Returns whether the answer was right and announces the feedback.
    ///
    /// # Errors
    ///
    /// [`QuizError::WrongPhase`] outside Presenting (so a second click during
    /// feedback cannot score twice); [`QuizError::OptionOutOfRange`] for an
    /// index past the last option.
    pub fn answer(&mut self, chosen: usize, live: &mut LiveRegion) -> Result<bool, QuizError> {
        if self.phase != QuizPhase::Presenting {
            return Err(QuizError::WrongPhase);
        }
        let question = self.questions.get(self.index).ok_or(QuizError::WrongPhase)?;
        if chosen >= question.options.len() {
            return Err(QuizError::OptionOutOfRange(chosen));
        }

        let correct = chosen == question.correct;
        let right = question.labeled(question.correct).unwrap_or_default();
        if correct {
            self.score += 1;
            live.announce(format!("Correto! A resposta é {right}."));
        } else {
            live.announce(format!("Incorreto. A resposta certa é {right}."));
        }
        self.phase = QuizPhase::Feedback { chosen, correct };
        Ok(correct)
    }

    /// Leave Feedback: show the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// [`QuizError::WrongPhase`] unless in Feedback.
    pub fn advance(&mut self, store: &PersistenceStore, live: &mut LiveRegion) -> Result<QuizPhase, QuizError> {
        if !matches!(self.phase, QuizPhase::Feedback { .. }) {
            return Err(QuizError::WrongPhase);
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.phase = QuizPhase::Presenting;
            return Ok(self.phase);
        }

        let result = self.finish(store);
        let mut message = format!("Fim! Sua pontuação: {}/{}.", result.score, result.total);
        if result.new_record {
            message.push_str(" Novo recorde!");
        } else {
            message.push_str(&format!(" Recorde: {}.", result.best));
        }
        live.announce(message);
        self.phase = QuizPhase::Finished(result);
        Ok(self.phase)
    }

    fn finish(&self, store: &PersistenceStore) -> QuizResult {
        let previous = best_score(store);
        let new_record = self.score > previous;
        if new_record {
            store.set(BEST_SCORE_KEY, &self.score.to_string());
        }
        let result = QuizResult { score: self.score, total: self.total(), best: previous.max(self.score), new_record };
        self.diagnostics.record(DiagEvent::QuizFinished { score: result.score, total: result.total, new_record });
        result
    }

    /// Back to the first question with a zero score. The stored best is kept.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.phase = QuizPhase::Presenting;
    }

    #[must_use]
    pub fn option_state(&self, option: usize) -> OptionState {
        match self.phase {
            QuizPhase::Presenting => OptionState::Enabled,
            QuizPhase::Feedback { chosen, .. } => {
                let correct = self.questions.get(self.index).map(Question::correct);
                if correct == Some(option) {
                    OptionState::Correct
                } else if option == chosen {
                    OptionState::Wrong
                } else {
                    OptionState::Disabled
                }
            }
            QuizPhase::Finished(_) => OptionState::Disabled,
        }
    }

    /// Whether a best score is stored (drives the "clear" button).
    #[must_use]
    pub fn can_clear_best(store: &PersistenceStore) -> bool {
        store.get(BEST_SCORE_KEY).is_some()
    }

    pub fn clear_best(store: &PersistenceStore) {
        store.remove(BEST_SCORE_KEY);
    }
}

/// Persisted best score; missing or corrupt values read as 0.
#[must_use]
pub fn best_score(store: &PersistenceStore) -> u32 {
    let Some(raw) = store.get(BEST_SCORE_KEY) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(best) => best,
        Err(e) => {
            log::warn!("ignoring stored best score {raw:?}: {e}");
            0
        }
    }
}
