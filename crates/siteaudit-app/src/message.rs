//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use siteaudit_core::ScanResult;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (Ctrl+C, `q`, signal handler)
    Quit,

    /// Move focus to the next focusable control
    FocusNext,

    // ─────────────────────────────────────────────────────────
    // Scan Form Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the URL field
    UrlInput(char),
    /// Delete the last character of the URL field
    UrlBackspace,
    /// Clear the URL field
    UrlClear,
    /// Replace the URL field (paste, CLI argument, headless command)
    SetUrl(String),
    /// Submit the scan form
    SubmitScan,

    // ─────────────────────────────────────────────────────────
    // Scan Lifecycle Messages (from the background scan task)
    // ─────────────────────────────────────────────────────────
    /// The scanner produced a result
    ScanCompleted { result: ScanResult },
    /// The scanner failed; `reason` is for the log, not the user
    ScanFailed { reason: String },

    // ─────────────────────────────────────────────────────────
    // Report Capture Messages
    // ─────────────────────────────────────────────────────────
    /// Open the email form ("Get Free PDF Report")
    ShowEmailForm,
    /// Close the email form without submitting
    HideEmailForm,
    /// Append a character to the email field
    EmailInput(char),
    /// Delete the last character of the email field
    EmailBackspace,
    /// Replace the email field
    SetEmail(String),
    /// Submit the email form
    SubmitEmail,
    /// Dismiss the one-shot acknowledgment
    DismissAcknowledgment,

    // ─────────────────────────────────────────────────────────
    // Results View
    // ─────────────────────────────────────────────────────────
    /// Scroll the results panel by a signed number of lines
    ScrollResults(i32),
}
