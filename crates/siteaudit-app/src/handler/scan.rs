//! Scan form and scan lifecycle handlers

use siteaudit_core::prelude::*;
use siteaudit_core::{ScanResult, SCAN_FAILED_MESSAGE};

use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

/// Append a character to the URL field (locked while scanning)
pub fn handle_url_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.scan.can_edit() {
        state.scan.url.push(c);
    }
    UpdateResult::none()
}

pub fn handle_url_backspace(state: &mut AppState) -> UpdateResult {
    if state.scan.can_edit() {
        state.scan.url.pop();
    }
    UpdateResult::none()
}

pub fn handle_url_clear(state: &mut AppState) -> UpdateResult {
    if state.scan.can_edit() {
        state.scan.url.clear();
    }
    UpdateResult::none()
}

pub fn handle_set_url(state: &mut AppState, url: String) -> UpdateResult {
    if state.scan.can_edit() {
        state.scan.url = url;
    }
    UpdateResult::none()
}

/// Submit the scan form.
///
/// Ignored while a scan is running or when the URL is empty. Otherwise enters
/// Scanning and asks the event loop to run the scanner on the normalized URL.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(url) = state.scan.begin() else {
        debug!(
            "Scan submit ignored (loading={}, empty={})",
            state.scan.loading,
            state.scan.url.is_empty()
        );
        return UpdateResult::none();
    };

    state.scans_started += 1;
    state.spinner_frame = 0;
    state.results_scroll = 0;
    state.email.hide();
    state.focus = Focus::UrlInput;
    info!("Scan #{} started: {}", state.scans_started, url);

    UpdateResult::action(UpdateAction::RunScan { url })
}

pub fn handle_completed(state: &mut AppState, result: ScanResult) -> UpdateResult {
    let url = result.url.clone();
    let score = result.summary.score;
    if state.scan.complete(result) {
        info!("Scan completed: {} (score {})", url, score);
    } else {
        warn!("Dropping scan result for {} - no scan in progress", url);
    }
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, reason: String) -> UpdateResult {
    if state.scan.fail(SCAN_FAILED_MESSAGE) {
        warn!("Scan failed: {}", reason);
    } else {
        warn!("Dropping scan failure - no scan in progress: {}", reason);
    }
    UpdateResult::none()
}

/// Move the results view, clamped to the rendered content
pub fn handle_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    let max = i32::from(state.max_results_scroll());
    let next = (i32::from(state.results_scroll) + delta).clamp(0, max);
    state.results_scroll = u16::try_from(next).unwrap_or(0);
    UpdateResult::none()
}
