//! Application state (Model in TEA pattern)

use siteaudit_core::{normalize_url, ScanResult};

use crate::config::Settings;

/// Text shown while a scan is running
pub const SCANNING_MESSAGE: &str = "Analyzing your website for accessibility issues...";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// URL text field of the scan form
    #[default]
    UrlInput,
    /// "Get Free PDF Report" call-to-action under the results
    ReportButton,
    /// Email text field of the report form
    EmailInput,
}

// ─────────────────────────────────────────────────────────────────────────────
// Scan Simulation Controller
// ─────────────────────────────────────────────────────────────────────────────

/// View state of the scan form and its results.
///
/// Idle is `loading == false`; Scanning is `loading == true`. `results` is
/// cleared when a scan starts and set once when it completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Raw text of the URL field, as typed
    pub url: String,
    pub loading: bool,
    pub results: Option<ScanResult>,
    /// Inline error message, if the last scan failed
    pub error: Option<String>,
}

impl ScanState {
    /// The submit control is enabled only when idle with a non-empty URL
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.url.is_empty()
    }

    /// The URL field accepts edits only while idle
    pub fn can_edit(&self) -> bool {
        !self.loading
    }

    /// Enter Scanning. Returns the normalized target, or `None` when the
    /// submit guard is closed (nothing changes in that case).
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        self.results = None;
        self.loading = true;
        Some(normalize_url(&self.url))
    }

    /// Leave Scanning with a result. Ignored when no scan is running.
    pub fn complete(&mut self, result: ScanResult) -> bool {
        if !self.loading {
            return false;
        }
        self.results = Some(result);
        self.loading = false;
        true
    }

    /// Leave Scanning with an inline error. Ignored when no scan is running.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.loading {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Email Capture Flow
// ─────────────────────────────────────────────────────────────────────────────

/// Hidden/Visible state of the report email form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCapture {
    pub visible: bool,
    pub email: String,
    /// Set after a submit with a malformed address; cleared on edit
    pub invalid: bool,
    /// One-shot acknowledgment shown after a successful submit
    pub acknowledgment: Option<String>,
}

impl EmailCapture {
    pub fn show(&mut self) {
        self.visible = true;
        self.invalid = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.invalid = false;
    }

    /// Acknowledgment text for an accepted address
    pub fn acknowledgment_for(email: &str) -> String {
        format!("Thanks! We'll send the detailed report to {email}")
    }
}

/// Lines the results panel renders for `result`: URL, summary, a blank
/// separator, then two lines per issue
pub fn results_line_count(result: &ScanResult) -> u16 {
    let lines = 3 + 2 * result.issues.len();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub focus: Focus,
    pub scan: ScanState,
    pub email: EmailCapture,
    pub settings: Settings,
    /// Spinner frame, advanced on each tick while scanning
    pub spinner_frame: u64,
    /// Number of scans started in this run
    pub scans_started: u64,
    /// First visible line of the results panel
    pub results_scroll: u16,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The report call-to-action exists only below a result
    pub fn report_available(&self) -> bool {
        self.scan.results.is_some() && !self.scan.loading
    }

    /// Largest useful results scroll offset: the last content line at the top
    pub fn max_results_scroll(&self) -> u16 {
        self.scan
            .results
            .as_ref()
            .map(|result| results_line_count(result).saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteaudit_core::{sample_issues, ScanSummary};

    fn result_for(url: &str) -> ScanResult {
        ScanResult::new(
            url,
            ScanSummary {
                errors: 2,
                warnings: 6,
                passed: 20,
                score: 75,
            },
            sample_issues(),
        )
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = AppState::new();
        assert!(!state.scan.loading);
        assert!(state.scan.results.is_none());
        assert!(state.scan.error.is_none());
        assert!(!state.email.visible);
        assert_eq!(state.focus, Focus::UrlInput);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_begin_requires_url() {
        let mut scan = ScanState::default();
        assert!(!scan.can_submit());
        assert_eq!(scan.begin(), None);
        assert!(!scan.loading);
    }

    #[test]
    fn test_begin_normalizes_and_clears() {
        let mut scan = ScanState {
            url: "example.com".into(),
            error: Some("old".into()),
            results: Some(result_for("https://old.example")),
            ..Default::default()
        };
        assert_eq!(scan.begin().as_deref(), Some("https://example.com"));
        assert!(scan.loading);
        assert!(scan.error.is_none());
        assert!(scan.results.is_none());
        assert_eq!(scan.url, "example.com");
    }

    #[test]
    fn test_begin_while_loading_is_refused() {
        let mut scan = ScanState {
            url: "example.com".into(),
            ..Default::default()
        };
        assert!(scan.begin().is_some());
        assert!(!scan.can_submit());
        assert_eq!(scan.begin(), None);
        assert!(scan.loading);
    }

    #[test]
    fn test_complete_and_fail_only_while_loading() {
        let mut scan = ScanState::default();
        assert!(!scan.complete(result_for("https://a.b")));
        assert!(!scan.fail("nope"));
        assert!(scan.results.is_none());
        assert!(scan.error.is_none());

        scan.url = "a.b".into();
        scan.begin();
        assert!(scan.complete(result_for("https://a.b")));
        assert!(!scan.loading);
        assert!(scan.results.is_some());
    }

    #[test]
    fn test_acknowledgment_text() {
        assert_eq!(
            EmailCapture::acknowledgment_for("me@example.com"),
            "Thanks! We'll send the detailed report to me@example.com"
        );
    }

    #[test]
    fn test_max_results_scroll() {
        let mut state = AppState::new();
        assert_eq!(state.max_results_scroll(), 0);
        state.scan.results = Some(result_for("https://a.b"));
        // 3 header lines + 4 issues * 2 lines, last line at the top
        assert_eq!(state.max_results_scroll(), 10);
    }

    #[test]
    fn test_report_available_needs_results() {
        let mut state = AppState::new();
        assert!(!state.report_available());
        state.scan.results = Some(result_for("https://a.b"));
        assert!(state.report_available());
    }
}
