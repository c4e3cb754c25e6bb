//! Configuration file parsing for SiteAudit
//!
//! Supports:
//! - `.siteaudit/config.toml` - Scan and UI settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
