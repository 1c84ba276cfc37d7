//! Commit notes: a capped, newest-first list persisted as JSON.

#[cfg(test)]
#[path = "commits_test.rs"]
mod commits_test;

use crate::consts::{COMMITS_KEY, COMMIT_CAP};
use crate::diagnostics::{DiagEvent, Diagnostics};
use crate::live::LiveRegion;
use crate::persistence::PersistenceStore;

pub const SUBMITTED_ANNOUNCEMENT: &str = "Compromisso enviado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("commit note is empty")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct CommitLog {
    notes: Vec<String>,
    diagnostics: Diagnostics,
}

impl CommitLog {
    /// Read the stored list. A missing or corrupt value yields an empty log.
    #[must_use]
    pub fn load(store: &PersistenceStore) -> Self {
        let mut notes = match store.get(COMMITS_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    log::warn!("ignoring corrupt {COMMITS_KEY}: {e}");
                    Vec::new()
                }
            },
        };
        notes.truncate(COMMIT_CAP);
        Self { notes, diagnostics: Diagnostics::noop() }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Newest first.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Trim, prepend, cap, persist, announce.
    ///
    /// # Errors
    ///
    /// [`CommitError::Empty`] for blank input; nothing is stored or announced.
    pub fn submit(&mut self, text: &str, store: &PersistenceStore, live: &mut LiveRegion) -> Result<(), CommitError> {
        let note = text.trim();
        if note.is_empty() {
            return Err(CommitError::Empty);
        }
        self.notes.insert(0, note.to_owned());
        self.notes.truncate(COMMIT_CAP);
        self.persist(store);
        live.announce(SUBMITTED_ANNOUNCEMENT);
        self.diagnostics.record(DiagEvent::CommitSubmitted { total: self.notes.len() });
        Ok(())
    }

    /// Empty the list in memory and in storage.
    pub fn clear(&mut self, store: &PersistenceStore) {
        self.notes.clear();
        store.remove(COMMITS_KEY);
    }

    fn persist(&self, store: &PersistenceStore) {
        match serde_json::to_string(&self.notes) {
            Ok(json) => store.set(COMMITS_KEY, &json),
            Err(e) => log::warn!("could not encode commit notes: {e}"),
        }
    }
}
