//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown inline whenever a scan fails, regardless of the cause.
pub const SCAN_FAILED_MESSAGE: &str = "Failed to scan website. Please try again.";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    // ─────────────────────────────────────────────────────────────
    // Scan Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Scan failed: {message}")]
    Scan { message: String },

    #[error("Scan of {url} timed out after {after_ms}ms")]
    ScanTimeout { url: String, after_ms: u64 },

    #[error("Scan target is unreachable: {url}")]
    ScanUnreachable { url: String },

    #[error("Scanner returned a malformed response: {message}")]
    ScanMalformed { message: String },

    #[error("A scan is already in progress")]
    ScanInProgress,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn scan(message: impl Into<String>) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }

    pub fn scan_timeout(url: impl Into<String>, after_ms: u64) -> Self {
        Self::ScanTimeout {
            url: url.into(),
            after_ms,
        }
    }

    pub fn scan_unreachable(url: impl Into<String>) -> Self {
        Self::ScanUnreachable { url: url.into() }
    }

    pub fn scan_malformed(message: impl Into<String>) -> Self {
        Self::ScanMalformed {
            message: message.into(),
        }
    }

    /// Whether this error came out of the scan collaborator.
    pub fn is_scan_failure(&self) -> bool {
        matches!(
            self,
            Error::Scan { .. }
                | Error::ScanTimeout { .. }
                | Error::ScanUnreachable { .. }
                | Error::ScanMalformed { .. }
        )
    }

    /// The inline message the user sees for this error.
    ///
    /// Every scan failure collapses to [`SCAN_FAILED_MESSAGE`]; the typed
    /// detail only goes to the log.
    pub fn user_message(&self) -> String {
        if self.is_scan_failure() {
            SCAN_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
