//! Console logging setup and the signal-backed diagnostics sink.
//!
//! SYSTEM CONTEXT
//! ==============
//! `atlas` components report through [`atlas::diagnostics::Diagnostics`].
//! In the page that handle wraps [`SignalSink`]: status values land in a
//! reactive [`StatusReadout`] the debug bar renders, and events are written
//! to the console through `log`.
//!
//! Failure events are always logged at `warn`; routine events only when the
//! page runs with `?debug=1`.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use atlas::diagnostics::{DiagEvent, DiagnosticsSink, StatusKey, StatusReadout};
use leptos::prelude::*;

/// Prefix on every diagnostic console line.
pub const LOG_PREFIX: &str = "[vt]";

/// Console level for the page.
pub fn log_level(verbose: bool) -> log::Level {
    if verbose { log::Level::Debug } else { log::Level::Warn }
}

/// Install the panic hook and the console logger. Safe to call once per page.
pub fn init_logging(verbose: bool) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log_level(verbose)) {
            leptos::logging::warn!("{LOG_PREFIX} logger already installed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = verbose;
    }
}

/// Console line for an event.
pub fn event_line(event: &DiagEvent) -> String {
    format!("{LOG_PREFIX} {event}")
}

/// Sink writing status values into a signal and events to the console.
#[derive(Clone, Copy, Debug)]
pub struct SignalSink {
    readout: RwSignal<StatusReadout>,
    verbose: bool,
}

impl SignalSink {
    pub fn new(readout: RwSignal<StatusReadout>, verbose: bool) -> Self {
        Self { readout, verbose }
    }
}

impl DiagnosticsSink for SignalSink {
    fn record(&self, event: &DiagEvent) {
        if event.is_failure() {
            log::warn!("{}", event_line(event));
        } else if self.verbose {
            log::info!("{}", event_line(event));
        }
    }

    fn update_status(&self, key: StatusKey, text: &str) {
        self.readout.update(|r| r.set(key, text));
        if self.verbose {
            log::debug!("{LOG_PREFIX} status {}={text}", key.as_str());
        }
    }
}
