//! Key event handlers, routed by the focused control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // The acknowledgment popup swallows input until dismissed
    if state.email.acknowledgment.is_some() {
        return match key {
            InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
                Some(Message::DismissAcknowledgment)
            }
            _ => None,
        };
    }

    // Arrow and page keys scroll the results from any focus
    if let Some(delta) = scroll_delta(&key) {
        return state
            .scan
            .results
            .is_some()
            .then_some(Message::ScrollResults(delta));
    }

    match state.focus {
        Focus::UrlInput => handle_key_url_input(key),
        Focus::ReportButton => handle_key_report_button(key),
        Focus::EmailInput => handle_key_email_input(key),
    }
}

/// Lines moved by PageUp/PageDown
const RESULTS_PAGE: i32 = 5;

fn scroll_delta(key: &InputKey) -> Option<i32> {
    match key {
        InputKey::Up => Some(-1),
        InputKey::Down => Some(1),
        InputKey::PageUp => Some(-RESULTS_PAGE),
        InputKey::PageDown => Some(RESULTS_PAGE),
        _ => None,
    }
}

fn handle_key_url_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitScan),
        InputKey::Backspace => Some(Message::UrlBackspace),
        InputKey::CharCtrl('u') => Some(Message::UrlClear),
        InputKey::Tab | InputKey::BackTab => Some(Message::FocusNext),
        InputKey::Char(c) => Some(Message::UrlInput(c)),
        _ => None,
    }
}

fn handle_key_report_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ShowEmailForm),
        InputKey::Tab | InputKey::BackTab | InputKey::Esc => Some(Message::FocusNext),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_email_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitEmail),
        InputKey::Esc => Some(Message::HideEmailForm),
        InputKey::Backspace => Some(Message::EmailBackspace),
        InputKey::Char(c) => Some(Message::EmailInput(c)),
        _ => None,
    }
}
