//! TOML-based application configuration.
//!
//! Stores:
//! - Which catalog fixture to load (built-in when unset)
//! - The organization/application scope of the settings store
//! - Default log level
//!
//! Configuration is stored at `~/.config/recipebox/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};

use super::data_dir;
use super::settings::SettingsScope;
use crate::error::ConfigError;

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a TOML catalog fixture. Empty or unset means built-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Settings store namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_application")]
    pub application: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/recipebox/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_organization() -> String {
    SettingsScope::default().organization
}
fn default_application() -> String {
    SettingsScope::default().application
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            application: default_application(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Check that `level` is a usable filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is empty or contains a directive that is
    /// neither a bare level (`warn`) nor a `target=level` pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_log_filter(&self.level).map_err(|message| ConfigError::InvalidValue {
            key: "logging.level".into(),
            message,
        })
    }
}

/// EnvFilter treats any bare word as a target name, so bare directives are
/// held to level names here.
fn check_log_filter(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("empty log filter".into());
    }
    for directive in value.split(',').map(str::trim) {
        // LevelFilter parses "" as ERROR.
        if directive.is_empty() {
            return Err(format!("empty directive in '{value}'"));
        }
        if directive.contains('=') || directive.contains('[') {
            directive
                .parse::<Directive>()
                .map_err(|e| format!("'{directive}': {e}"))?;
        } else {
            directive
                .parse::<LevelFilter>()
                .map_err(|e| format!("'{directive}': {e}"))?;
        }
    }
    EnvFilter::try_new(value).map(|_| ()).map_err(|e| e.to_string())
}

/// Fields that may be set but are absent from the serialized form when unset.
const OPTIONAL_KEYS: &[&str] = &["catalog.path"];

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let new_value = match obj.get(part) {
                    Some(serde_json::Value::Bool(_)) => {
                        let b = value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?;
                        serde_json::Value::Bool(b)
                    }
                    Some(serde_json::Value::Number(_)) => {
                        let n = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    Some(serde_json::Value::Object(_)) | Some(serde_json::Value::Array(_)) => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: "not a leaf value".into(),
                        });
                    }
                    Some(_) => serde_json::Value::String(value.into()),
                    None if OPTIONAL_KEYS.contains(&key) => serde_json::Value::String(value.into()),
                    None => return Err(unknown()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Path of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing and returning the default when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing the default there when absent.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// See [`Config::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::get_json_value_by_path(&json, key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None if OPTIONAL_KEYS.contains(&key) => Some(String::new()),
            None => None,
        }
    }

    /// Set a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value has the wrong type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if key == "logging.level" {
            check_log_filter(value).map_err(|message| ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            })?;
        }
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Scope for the favorites settings store.
    pub fn settings_scope(&self) -> SettingsScope {
        SettingsScope::new(&self.settings.organization, &self.settings.application)
    }
}
