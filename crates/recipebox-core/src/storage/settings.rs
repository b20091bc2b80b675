//! Key-value settings storage.
//!
//! Entries are whole lists of strings: a write replaces the entry, a read
//! returns it (or an empty list when absent). There is no partial update.
//!
//! [`FileSettingsStore`] keeps one TOML file per organization/application
//! pair at `<config root>/<organization>/<application>.toml`:
//!
//! ```toml
//! favorites = ["r2", "r4"]
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config_root;
use crate::error::PersistenceError;

/// Storage backend for list-valued settings entries.
pub trait SettingsStore {
    /// Read an entry. Absent entries read as an empty list.
    fn read_list(&self, key: &str) -> Result<Vec<String>, PersistenceError>;

    /// Replace an entry with `values`.
    fn write_list(&mut self, key: &str, values: &[String]) -> Result<(), PersistenceError>;
}

/// Organization/application namespace that names a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsScope {
    pub organization: String,
    pub application: String,
}

impl SettingsScope {
    pub fn new(organization: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            application: application.into(),
        }
    }
}

impl Default for SettingsScope {
    fn default() -> Self {
        Self::new("RecipeExplorer", "RecipeApp")
    }
}

/// Settings persisted to a TOML file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store for `scope` under the per-user config root.
    ///
    /// # Errors
    ///
    /// Returns an error if either scope component is empty or contains a
    /// path separator.
    pub fn open(scope: &SettingsScope) -> Result<Self, PersistenceError> {
        for part in [&scope.organization, &scope.application] {
            if part.trim().is_empty() || part.contains(['/', '\\']) || part == ".." {
                return Err(PersistenceError::Unavailable(format!(
                    "invalid settings scope component '{part}'"
                )));
            }
        }
        let path = config_root()
            .join(&scope.organization)
            .join(format!("{}.toml", scope.application));
        Ok(Self { path })
    }

    /// Store backed by an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, PersistenceError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(PersistenceError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        content
            .parse::<toml::Table>()
            .map_err(|e| PersistenceError::ParseFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }
}

impl SettingsStore for FileSettingsStore {
    fn read_list(&self, key: &str) -> Result<Vec<String>, PersistenceError> {
        let table = self.read_table()?;
        let Some(value) = table.get(key) else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| PersistenceError::InvalidEntry {
                key: key.to_string(),
                message: format!("expected an array, found {}", value.type_str()),
            })?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| PersistenceError::InvalidEntry {
                        key: key.to_string(),
                        message: format!("expected string items, found {}", item.type_str()),
                    })
            })
            .collect()
    }

    fn write_list(&mut self, key: &str, values: &[String]) -> Result<(), PersistenceError> {
        // Unrelated keys survive the rewrite; an unreadable file does not
        // block replacing it.
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "settings file unreadable, overwriting and dropping its other entries"
                );
                toml::Table::new()
            }
        };
        table.insert(
            key.to_string(),
            toml::Value::Array(values.iter().cloned().map(toml::Value::String).collect()),
        );
        let content = toml::to_string_pretty(&table)
            .map_err(|e| PersistenceError::SerializeFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PersistenceError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, content).map_err(|source| PersistenceError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), key, count = values.len(), "settings entry written");
        Ok(())
    }
}

/// In-process settings, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    entries: HashMap<String, Vec<String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry.
    pub fn with_entry(mut self, key: &str, values: &[&str]) -> Self {
        self.entries
            .insert(key.to_string(), values.iter().map(|v| v.to_string()).collect());
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn read_list(&self, key: &str) -> Result<Vec<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }

    fn write_list(&mut self, key: &str, values: &[String]) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
