//! Headless mode runner - main event loop without TUI
//!
//! With a URL the runner performs one scan and exits. Without one it reads
//! commands from stdin until `quit` or end of input.

use tokio::sync::mpsc;

use siteaudit_app::config::Settings;
use siteaudit_app::email::INVALID_EMAIL_MESSAGE;
use siteaudit_app::message::Message;
use siteaudit_app::{Engine, Scanner};
use siteaudit_core::prelude::*;

use super::command::{self, Command};
use super::{transition_events, HeadlessEvent, Snapshot};

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings, url: Option<String>) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("SiteAudit starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut sink = |event: HeadlessEvent| event.emit();

    let result = match url {
        Some(url) => run_once(&mut engine, url, &mut sink).await,
        None => {
            let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
            std::thread::spawn(move || {
                spawn_stdin_reader_blocking(cmd_tx);
            });
            run_commands(&mut engine, cmd_rx, &mut sink).await
        }
    };

    info!("SiteAudit headless mode exiting");
    result
}

/// Process one message and report the state transitions it caused
fn step<S, F>(engine: &mut Engine<S>, msg: Message, sink: &mut F)
where
    S: Scanner + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let before = Snapshot::of(&engine.state);
    engine.process_message(msg);
    for event in transition_events(&before, &engine.state) {
        sink(event);
    }
}

/// Scan `url` once and return when the scan has finished
pub async fn run_once<S, F>(engine: &mut Engine<S>, url: String, sink: &mut F) -> Result<()>
where
    S: Scanner + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    step(engine, Message::SetUrl(url), sink);
    step(engine, Message::SubmitScan, sink);

    if !engine.is_scanning() {
        // Only an empty URL leaves the form idle
        sink(HeadlessEvent::error("No URL to scan", true));
        return Ok(());
    }

    while engine.is_scanning() {
        match engine.msg_rx.recv().await {
            Some(msg) => step(engine, msg, sink),
            None => {
                sink(HeadlessEvent::from_error(&Error::ChannelClosed));
                return Err(Error::ChannelClosed);
            }
        }
    }
    Ok(())
}

/// Main headless event loop driven by stdin commands
pub async fn run_commands<S, F>(
    engine: &mut Engine<S>,
    mut cmd_rx: mpsc::Receiver<Command>,
    sink: &mut F,
) -> Result<()>
where
    S: Scanner + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut input_open = true;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if !input_open && !engine.is_scanning() {
            info!("Input closed and no scan in flight");
            break;
        }

        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => step(engine, msg, sink),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            cmd = cmd_rx.recv(), if input_open => match cmd {
                Some(cmd) => handle_command(engine, cmd, sink),
                None => input_open = false,
            },
        }
    }

    Ok(())
}

/// Apply one stdin command to the engine
fn handle_command<S, F>(engine: &mut Engine<S>, cmd: Command, sink: &mut F)
where
    S: Scanner + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    match cmd {
        Command::Scan(url) => {
            if engine.is_scanning() {
                sink(HeadlessEvent::from_error(&Error::ScanInProgress));
                return;
            }
            step(engine, Message::SetUrl(url), sink);
            step(engine, Message::SubmitScan, sink);
        }
        Command::Report(email) => {
            if !engine.state.report_available() {
                sink(HeadlessEvent::error("No scan result to report on", false));
                return;
            }
            step(engine, Message::DismissAcknowledgment, sink);
            step(engine, Message::ShowEmailForm, sink);
            step(engine, Message::SetEmail(email), sink);
            step(engine, Message::SubmitEmail, sink);
            if engine.state.email.invalid {
                sink(HeadlessEvent::error(INVALID_EMAIL_MESSAGE, false));
                step(engine, Message::HideEmailForm, sink);
            }
        }
        Command::Quit => step(engine, Message::Quit, sink),
    }
}

/// Read stdin lines and forward parsed commands (blocking; runs on its own thread)
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<Command>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match command::parse(&line) {
                Ok(Some(cmd)) => {
                    let quit = cmd == Command::Quit;
                    if cmd_tx.blocking_send(cmd).is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(message) => {
                    warn!("Stdin: {}", message);
                    HeadlessEvent::error(message, false).emit();
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteaudit_app::SimulatedScanner;
    use std::time::Duration;

    fn engine() -> Engine {
        Engine::with_scanner(
            Settings::default(),
            SimulatedScanner::with_seed(Duration::ZERO, 7),
        )
    }

    #[tokio::test]
    async fn test_run_once_emits_start_and_completion() {
        let mut engine = engine();
        let mut events = Vec::new();
        run_once(&mut engine, "example.com".into(), &mut |e| events.push(e))
            .await
            .unwrap();

        let names: Vec<&str> = events.iter().map(HeadlessEvent::name).collect();
        assert_eq!(names, ["scan_started", "scan_completed"]);
        assert!(matches!(&events[0], HeadlessEvent::ScanStarted { url, .. } if url == "https://example.com"));
    }

    #[tokio::test]
    async fn test_run_once_empty_url_reports_error() {
        let mut engine = engine();
        let mut events = Vec::new();
        run_once(&mut engine, String::new(), &mut |e| events.push(e))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "error");
    }

    #[tokio::test]
    async fn test_commands_scan_then_report() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel(8);
        tx.send(Command::Scan("example.com".into())).await.unwrap();
        drop(tx);

        let mut events = Vec::new();
        run_commands(&mut engine, rx, &mut |e| events.push(e))
            .await
            .unwrap();
        assert_eq!(events.last().map(HeadlessEvent::name), Some("scan_completed"));

        // Report once a result exists
        let (tx, rx) = mpsc::channel(8);
        tx.send(Command::Report("me@example.com".into())).await.unwrap();
        tx.send(Command::Report("nope".into())).await.unwrap();
        tx.send(Command::Quit).await.unwrap();

        let mut events = Vec::new();
        run_commands(&mut engine, rx, &mut |e| events.push(e))
            .await
            .unwrap();
        let names: Vec<&str> = events.iter().map(HeadlessEvent::name).collect();
        assert_eq!(names, ["report_requested", "error"]);
        assert!(engine.should_quit());
        assert!(!engine.state.email.visible);
    }

    #[tokio::test]
    async fn test_report_before_scan_is_an_error() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel(8);
        tx.send(Command::Report("me@example.com".into())).await.unwrap();
        drop(tx);

        let mut events = Vec::new();
        run_commands(&mut engine, rx, &mut |e| events.push(e))
            .await
            .unwrap();
        assert!(matches!(
            &events[..],
            [HeadlessEvent::Error { message, fatal: false, .. }] if message == "No scan result to report on"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_while_scanning_is_rejected() {
        let mut engine = Engine::with_scanner(
            Settings::default(),
            SimulatedScanner::with_seed(Duration::from_secs(3), 1),
        );
        let (tx, rx) = mpsc::channel(8);
        tx.send(Command::Scan("a.example".into())).await.unwrap();
        tx.send(Command::Scan("b.example".into())).await.unwrap();
        drop(tx);

        let mut events = Vec::new();
        run_commands(&mut engine, rx, &mut |e| events.push(e))
            .await
            .unwrap();

        let names: Vec<&str> = events.iter().map(HeadlessEvent::name).collect();
        assert_eq!(names, ["scan_started", "error", "scan_completed"]);
        assert!(matches!(&events[2], HeadlessEvent::ScanCompleted { url, .. } if url == "https://a.example"));
    }
}
