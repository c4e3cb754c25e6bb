//! End-to-end scan and report flow through the Engine

use std::time::Duration;

use siteaudit_app::config::Settings;
use siteaudit_app::message::Message;
use siteaudit_app::{Engine, InputKey, Scanner, SimulatedScanner};
use siteaudit_core::{Error, Result, ScanResult, SCAN_FAILED_MESSAGE};

/// Scanner that always reports the target as unreachable
struct OfflineScanner;

impl Scanner for OfflineScanner {
    async fn scan(&self, url: &str) -> Result<ScanResult> {
        Err(Error::scan_unreachable(url))
    }
}

fn seeded_engine(delay: Duration) -> Engine {
    Engine::with_scanner(Settings::default(), SimulatedScanner::with_seed(delay, 42))
}

fn type_text<S: Scanner + Sync + 'static>(engine: &mut Engine<S>, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
}

#[tokio::test(start_paused = true)]
async fn test_typed_url_scans_after_delay() {
    let mut engine = seeded_engine(Duration::from_secs(3));

    type_text(&mut engine, "example.com");
    engine.process_message(Message::Key(InputKey::Enter));
    assert!(engine.is_scanning());
    assert!(engine.state.scan.results.is_none());

    let started = tokio::time::Instant::now();
    assert!(engine.process_next().await);
    assert!(started.elapsed() >= Duration::from_secs(3));

    let result = engine.state.scan.results.as_ref().expect("scan result");
    assert!(!engine.is_scanning());
    assert_eq!(result.url, "https://example.com");
    assert_eq!(result.issues.len(), 4);
    assert!(result.summary.is_within_ranges());
    // The field keeps what the user typed
    assert_eq!(engine.state.scan.url, "example.com");
}

#[tokio::test]
async fn test_explicit_scheme_is_kept() {
    let mut engine = seeded_engine(Duration::ZERO);
    engine.submit_url("http://example.com");
    engine.process_next().await;
    assert_eq!(
        engine.state.scan.results.as_ref().map(|r| r.url.as_str()),
        Some("http://example.com")
    );
}

#[tokio::test]
async fn test_empty_url_never_scans() {
    let mut engine = seeded_engine(Duration::ZERO);
    engine.process_message(Message::Key(InputKey::Enter));
    assert!(!engine.is_scanning());
    assert_eq!(engine.state.scans_started, 0);
    assert_eq!(engine.drain_pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_scanning_is_ignored() {
    let mut engine = seeded_engine(Duration::from_secs(3));
    engine.submit_url("a.example");
    engine.submit_url("b.example");
    assert_eq!(engine.state.scans_started, 1);
    assert_eq!(engine.state.scan.url, "a.example");

    engine.process_next().await;
    assert_eq!(
        engine.state.scan.results.as_ref().map(|r| r.url.as_str()),
        Some("https://a.example")
    );
}

#[tokio::test]
async fn test_new_scan_replaces_previous_result() {
    let mut engine = seeded_engine(Duration::ZERO);
    engine.submit_url("first.example");
    engine.process_next().await;

    engine.process_message(Message::UrlClear);
    engine.submit_url("second.example");
    assert!(engine.state.scan.results.is_none());

    engine.process_next().await;
    assert_eq!(
        engine.state.scan.results.as_ref().map(|r| r.url.as_str()),
        Some("https://second.example")
    );
    assert_eq!(engine.state.scans_started, 2);
}

#[tokio::test]
async fn test_scanner_failure_shows_generic_message() {
    let mut engine = Engine::with_scanner(Settings::default(), OfflineScanner);
    engine.submit_url("down.example");
    engine.process_next().await;

    assert!(!engine.is_scanning());
    assert!(engine.state.scan.results.is_none());
    assert_eq!(engine.state.scan.error.as_deref(), Some(SCAN_FAILED_MESSAGE));

    // Retrying clears the error while the scan runs
    engine.process_message(Message::SubmitScan);
    assert!(engine.is_scanning());
    assert!(engine.state.scan.error.is_none());
}

#[tokio::test]
async fn test_report_request_leaves_scan_untouched() {
    let mut engine = seeded_engine(Duration::ZERO);
    engine.submit_url("example.com");
    engine.process_next().await;
    let result_before = engine.state.scan.results.clone();

    engine.process_message(Message::Key(InputKey::Tab));
    engine.process_message(Message::Key(InputKey::Enter));
    assert!(engine.state.email.visible);

    type_text(&mut engine, "me@example.com");
    engine.process_message(Message::Key(InputKey::Enter));

    assert!(!engine.state.email.visible);
    assert_eq!(
        engine.state.email.acknowledgment.as_deref(),
        Some("Thanks! We'll send the detailed report to me@example.com")
    );
    assert_eq!(engine.state.scan.results, result_before);
    assert_eq!(engine.state.scan.url, "example.com");

    engine.process_message(Message::Key(InputKey::Enter));
    assert!(engine.state.email.acknowledgment.is_none());
}

#[tokio::test]
async fn test_quit_key_from_report_button() {
    let mut engine = seeded_engine(Duration::ZERO);
    engine.submit_url("example.com");
    engine.process_next().await;

    // 'q' types into the URL field while it has focus
    engine.process_message(Message::Key(InputKey::Char('q')));
    assert!(!engine.should_quit());
    assert_eq!(engine.state.scan.url, "example.comq");

    engine.process_message(Message::Key(InputKey::Tab));
    engine.process_message(Message::Key(InputKey::Char('q')));
    assert!(engine.should_quit());
}
