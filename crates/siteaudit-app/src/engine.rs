//! Engine - shared orchestration for the TUI and headless runners
//!
//! Owns the application state, the message channel, and the scan
//! collaborator. Front ends feed it messages and read `state` back.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::process::process_message;
use crate::scanner::{Scanner, SimulatedScanner};
use crate::state::AppState;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Application engine, generic over the scan collaborator
pub struct Engine<S = SimulatedScanner> {
    /// Current application state
    pub state: AppState,
    /// Receiver for messages from background tasks and input threads
    pub msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    scanner: Arc<S>,
}

impl Engine<SimulatedScanner> {
    /// Engine with the simulated scanner configured from `settings`
    pub fn new(settings: Settings) -> Self {
        let scanner = SimulatedScanner::from_settings(&settings.scan);
        Self::with_scanner(settings, scanner)
    }
}

impl<S> Engine<S>
where
    S: Scanner + Sync + 'static,
{
    /// Engine with an injected scanner
    pub fn with_scanner(settings: Settings, scanner: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        info!(
            "Engine ready (scan delay {}ms, seeded: {})",
            settings.scan.delay_ms,
            settings.scan.seed.is_some()
        );
        Self {
            state: AppState::with_settings(settings),
            msg_rx,
            msg_tx,
            scanner: Arc::new(scanner),
        }
    }

    /// Sender for feeding messages from other tasks or threads
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process one message through the update loop
    pub fn process_message(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &self.msg_tx, &self.scanner);
    }

    /// Process every message already waiting in the channel without blocking
    pub fn drain_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            processed += 1;
        }
        processed
    }

    /// Wait for the next message and process it. Returns `false` once the
    /// channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Put `url` in the form and submit it
    pub fn submit_url(&mut self, url: impl Into<String>) {
        self.process_message(Message::SetUrl(url.into()));
        self.process_message(Message::SubmitScan);
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_scanning(&self) -> bool {
        self.state.scan.loading
    }
}
