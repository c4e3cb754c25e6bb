//! Message processing
//!
//! Runs a message through the TEA update function, follows chained messages,
//! and hands any resulting action to the action dispatcher.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::scanner::Scanner;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    scanner: &Arc<S>,
) where
    S: Scanner + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(scanner));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
