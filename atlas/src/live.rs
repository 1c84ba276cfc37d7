//! Accessible live-region channel (`aria-live`).
//!
//! The sequence number bumps on every announcement so the UI re-renders (and
//! screen readers re-announce) even when the same text is posted twice.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveRegion {
    message: String,
    seq: u64,
}

impl LiveRegion {
    pub fn announce(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.seq += 1;
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}
