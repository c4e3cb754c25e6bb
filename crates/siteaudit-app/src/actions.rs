//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use siteaudit_core::{Error, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::message::Message;
use crate::scanner::Scanner;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, scanner: Arc<S>)
where
    S: Scanner + Sync + 'static,
{
    match action {
        UpdateAction::RunScan { url } => {
            tokio::spawn(async move {
                let msg = run_scan(scanner.as_ref(), url).await;
                if let Err(e) = deliver(&msg_tx, msg).await {
                    warn!("{}", e);
                }
            });
        }
    }
}

/// Hand a scan outcome back to the event loop
async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send("receiver dropped before the scan result arrived"))
}

/// Run one scan to completion and turn the outcome into a message
pub async fn run_scan<S: Scanner>(scanner: &S, url: String) -> Message {
    info!("Scanning {}", url);
    match scanner.scan(&url).await {
        Ok(result) => Message::ScanCompleted { result },
        Err(e) => {
            warn!("Scanner error for {}: {}", url, e);
            Message::ScanFailed {
                reason: e.to_string(),
            }
        }
    }
}
