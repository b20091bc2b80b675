//! Core error types for recipebox-core.
//!
//! This module defines the error hierarchy using thiserror. Catalog queries
//! never fail; errors only arise when loading fixtures, reading or writing
//! settings, and handling configuration. Settings and configuration code
//! return their own error types; [`CoreError`] covers catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for recipebox-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog fixture could not be read
    #[error("Failed to read catalog from {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by a settings store while reading or writing an entry.
///
/// The favorites registry logs these and keeps its in-memory state.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Settings file could not be read
    #[error("Failed to read settings from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be written
    #[error("Failed to write settings to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML
    #[error("Failed to parse settings at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(String),

    /// Entry exists but is not a list of strings
    #[error("Settings entry '{key}' is invalid: {message}")]
    InvalidEntry { key: String, message: String },

    /// Settings location could not be determined
    #[error("Settings location unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be determined or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Two recipes share an identifier
    #[error("Duplicate recipe id '{0}'")]
    DuplicateId(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Catalog fixture could not be parsed
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ValidationError {
    fn from(err: toml::de::Error) -> Self {
        ValidationError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
