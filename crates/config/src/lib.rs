pub mod schema;
pub mod watcher;

pub use schema::{GlobalConfig, MonitorConfig, Style, ThemeConfig};
pub use watcher::ConfigWatcher;

use om_core::{MonitorError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MonitorConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MonitorConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MonitorError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| MonitorError::Config(format!("TOML parse error: {e}")))
}

/// Return the config path: `$OVERMONITOR_CONFIG` if set, otherwise
/// `overmonitor/overmonitor.toml` under `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("OVERMONITOR_CONFIG") {
        return PathBuf::from(explicit);
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("overmonitor").join("overmonitor.toml")
}
