//! Headless mode - JSON event output instead of the TUI
//!
//! Events are written to stdout as NDJSON (newline-delimited JSON), one event
//! per line. Each event has an "event" field naming its type and a
//! millisecond `timestamp`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"scan_started","url":"https://example.com","timestamp":1704700001000}
//! {"event":"scan_completed","url":"https://example.com","summary":{"errors":3,"warnings":7,"passed":21,"score":88},"issues":[...],"timestamp":1704700004000}
//! {"event":"report_requested","email":"me@example.com","timestamp":1704700009000}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;

use siteaudit_app::state::AppState;
use siteaudit_core::prelude::*;
use siteaudit_core::{normalize_url, Issue, ScanResult, ScanSummary};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A scan entered the Scanning state
    ScanStarted { url: String, timestamp: i64 },

    /// A scan produced a result
    ScanCompleted {
        url: String,
        summary: ScanSummary,
        issues: Vec<Issue>,
        timestamp: i64,
    },

    /// A scan ended with the inline error message
    ScanFailed {
        url: String,
        message: String,
        timestamp: i64,
    },

    /// A valid report email was accepted
    ReportRequested { email: String, timestamp: i64 },

    /// Command or runtime error
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn scan_started(url: impl Into<String>) -> Self {
        Self::ScanStarted {
            url: url.into(),
            timestamp: Self::now(),
        }
    }

    pub fn scan_completed(result: &ScanResult) -> Self {
        Self::ScanCompleted {
            url: result.url.clone(),
            summary: result.summary,
            issues: result.issues.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn scan_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ScanFailed {
            url: url.into(),
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn report_requested(email: impl Into<String>) -> Self {
        Self::ReportRequested {
            email: email.into(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Error event for `err`, fatal when the run cannot continue
    pub fn from_error(err: &Error) -> Self {
        Self::error(err.to_string(), err.is_fatal())
    }

    /// Event name as it appears in the "event" field
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScanStarted { .. } => "scan_started",
            Self::ScanCompleted { .. } => "scan_completed",
            Self::ScanFailed { .. } => "scan_failed",
            Self::ReportRequested { .. } => "report_requested",
            Self::Error { .. } => "error",
        }
    }
}

/// The parts of [`AppState`] whose changes produce events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    scans_started: u64,
    loading: bool,
    acknowledged: bool,
}

impl Snapshot {
    pub fn of(state: &AppState) -> Self {
        Self {
            scans_started: state.scans_started,
            loading: state.scan.loading,
            acknowledged: state.email.acknowledgment.is_some(),
        }
    }
}

/// Events implied by the change from `before` to `state`
pub fn transition_events(before: &Snapshot, state: &AppState) -> Vec<HeadlessEvent> {
    let mut events = Vec::new();

    if state.scans_started > before.scans_started {
        events.push(HeadlessEvent::scan_started(normalize_url(&state.scan.url)));
    }

    if before.loading && !state.scan.loading {
        if let Some(result) = &state.scan.results {
            events.push(HeadlessEvent::scan_completed(result));
        } else if let Some(message) = &state.scan.error {
            events.push(HeadlessEvent::scan_failed(
                normalize_url(&state.scan.url),
                message.as_str(),
            ));
        }
    }

    if !before.acknowledged && state.email.acknowledgment.is_some() {
        events.push(HeadlessEvent::report_requested(state.email.email.as_str()));
    }

    events
}
