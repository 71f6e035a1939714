//! Core error types for autofocus-core.
//!
//! The core itself is pure computation over already-validated snapshots, so
//! the taxonomy is shallow: validation failures when constructing schedule
//! types, and storage/config failures at the persistence boundary. A corrupt
//! persisted document is fatal at that boundary -- the core is never invoked
//! with one.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for autofocus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors at the snapshot-document persistence boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The platform data directory could not be resolved
    #[error("Could not resolve the application data directory")]
    DataDirUnavailable,

    /// Failed to read the document file
    #[error("Failed to read document at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document failed to parse
    #[error("Corrupt document at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the document file
    #[error("Failed to write document at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A time string did not parse as HH:MM
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// A time window ends before it starts (overnight windows are not
    /// supported)
    #[error("Invalid time window: start ({start}) must not be after end ({end})")]
    InvalidTimeWindow { start: String, end: String },

    /// Invalid value for a named field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
