//! Report email capture handlers
//!
//! Hidden -> Visible -> Hidden. A submit never touches the scan state.

use siteaudit_core::prelude::*;

use crate::email::is_valid_email;
use crate::state::{AppState, EmailCapture, Focus};

use super::UpdateResult;

/// Open the email form. Only offered below a scan result.
pub fn handle_show(state: &mut AppState) -> UpdateResult {
    if !state.report_available() {
        return UpdateResult::none();
    }
    state.email.show();
    state.focus = Focus::EmailInput;
    UpdateResult::none()
}

pub fn handle_hide(state: &mut AppState) -> UpdateResult {
    if state.email.visible {
        state.email.hide();
        state.focus = Focus::ReportButton;
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.email.visible {
        state.email.email.push(c);
        state.email.invalid = false;
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.email.visible {
        state.email.email.pop();
        state.email.invalid = false;
    }
    UpdateResult::none()
}

pub fn handle_set(state: &mut AppState, value: String) -> UpdateResult {
    if state.email.visible {
        state.email.email = value;
        state.email.invalid = false;
    }
    UpdateResult::none()
}

/// Submit the email form.
///
/// A malformed address keeps the form open and flags it. A valid one closes
/// the form and leaves a local acknowledgment; nothing is sent anywhere.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.email.visible {
        return UpdateResult::none();
    }

    if !is_valid_email(&state.email.email) {
        debug!("Report email rejected: malformed address");
        state.email.invalid = true;
        return UpdateResult::none();
    }

    // TODO: hand the address to a mailing-list service once one exists.
    info!("Detailed report requested");
    state.email.acknowledgment = Some(EmailCapture::acknowledgment_for(&state.email.email));
    state.email.hide();
    state.focus = Focus::ReportButton;
    UpdateResult::none()
}

pub fn handle_dismiss(state: &mut AppState) -> UpdateResult {
    state.email.acknowledgment = None;
    UpdateResult::none()
}
