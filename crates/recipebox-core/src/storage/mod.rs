mod config;
pub mod settings;

pub use config::{CatalogConfig, Config, LoggingConfig, SettingsConfig};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsScope, SettingsStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Base directory for per-user configuration.
///
/// `$RECIPEBOX_CONFIG_HOME` if set, otherwise `~/.config`.
pub fn config_root() -> PathBuf {
    if let Some(dir) = std::env::var_os("RECIPEBOX_CONFIG_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
}

/// Returns `<config root>/recipebox[-dev]/` based on RECIPEBOX_ENV.
///
/// Set RECIPEBOX_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let env = std::env::var("RECIPEBOX_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        config_root().join("recipebox-dev")
    } else {
        config_root().join("recipebox")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
