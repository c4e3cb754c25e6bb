//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

use super::{email, keys::handle_key, scan, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.scan.loading {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus = match state.focus {
                Focus::UrlInput if state.report_available() => Focus::ReportButton,
                Focus::ReportButton => Focus::UrlInput,
                other => other,
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scan Form Messages
        // ─────────────────────────────────────────────────────────
        Message::UrlInput(c) => scan::handle_url_input(state, c),
        Message::UrlBackspace => scan::handle_url_backspace(state),
        Message::UrlClear => scan::handle_url_clear(state),
        Message::SetUrl(url) => scan::handle_set_url(state, url),
        Message::SubmitScan => scan::handle_submit(state),
        Message::ScanCompleted { result } => scan::handle_completed(state, result),
        Message::ScanFailed { reason } => scan::handle_failed(state, reason),

        // ─────────────────────────────────────────────────────────
        // Report Capture Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowEmailForm => email::handle_show(state),
        Message::HideEmailForm => email::handle_hide(state),
        Message::EmailInput(c) => email::handle_input(state, c),
        Message::EmailBackspace => email::handle_backspace(state),
        Message::SetEmail(value) => email::handle_set(state, value),
        Message::SubmitEmail => email::handle_submit(state),
        Message::DismissAcknowledgment => email::handle_dismiss(state),

        Message::ScrollResults(delta) => scan::handle_scroll(state, delta),
    }
}
