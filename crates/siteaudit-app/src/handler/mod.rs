//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `scan`: Scan form editing and scan lifecycle
//! - `email`: Report email capture flow
//! - `keys`: Key event routing by focus

pub(crate) mod email;
pub(crate) mod keys;
pub(crate) mod scan;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run the scanner against an already-normalized URL in the background.
    ///
    /// The task reports back with `Message::ScanCompleted` or
    /// `Message::ScanFailed`.
    RunScan { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
