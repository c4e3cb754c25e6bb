//! Settings parser for .siteaudit/config.toml

use super::types::Settings;
use siteaudit_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".siteaudit";

const DEFAULT_CONFIG: &str = r#"# SiteAudit Configuration

[scan]
# Simulated scan latency in milliseconds
delay_ms = 3000
# Fixed seed for repeatable results (omit for random)
# seed = 42

[ui]
# Show key hints at the bottom of the screen
show_key_hints = true
"#;

/// Path of the config file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.siteaudit/config.toml`.
///
/// A missing or unparseable file yields defaults; problems are logged.
pub fn load_settings(base_dir: &Path) -> Settings {
    let path = config_path(base_dir);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Create `<base_dir>/.siteaudit/config.toml` with commented defaults.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {CONFIG_DIR} dir: {e}")))?;
    }

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write {CONFIG_FILENAME}: {e}")))?;
        info!("Created default config at {:?}", path);
    }

    Ok(path)
}
