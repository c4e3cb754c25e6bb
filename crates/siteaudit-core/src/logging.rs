//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "SITEAUDIT_LOG";

const LOG_FILE_NAME: &str = "siteaudit.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/siteaudit/logs/` so they never mix
/// with the terminal UI or the headless NDJSON stream on stdout.
/// Log level is controlled by the `SITEAUDIT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SITEAUDIT_LOG=debug siteaudit example.com
/// SITEAUDIT_LOG=siteaudit_app=trace siteaudit --headless example.com
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("SiteAudit starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn default_directive() -> &'static str {
    "siteaudit=info,siteaudit_core=info,siteaudit_app=info,siteaudit_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("siteaudit").join("logs"))
}

/// Base path of the log files; the daily appender adds a `.YYYY-MM-DD` suffix
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive()).is_ok());
    }

    #[test]
    fn test_log_file_lives_under_siteaudit_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("siteaudit/logs/siteaudit.log"));
    }
}
