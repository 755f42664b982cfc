//! Core error types for deeper-core.
//!
//! Storage and record-manipulation failures are kept in separate enums so
//! callers can distinguish "the disk is unhappy" from "you asked for a
//! routine item that does not exist".

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deeper-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Referenced a routine item that is not part of the routine
    #[error("Unknown routine item: {0}")]
    UnknownItem(String),

    /// Value supplied to an item does not match its kind
    #[error("Invalid value for item '{id}': {message}")]
    InvalidItemValue { id: String, message: String },

    /// Trigger time string could not be parsed
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Primary record could not be written
    #[error("Failed to save data to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be serialized
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Import file is not valid JSON
    #[error("Failed to parse import file {path}: {message}")]
    ImportParse { path: PathBuf, message: String },

    /// Import file parses but is not a Deeper record
    #[error("Invalid import format: record must contain 'meta' and 'preferences'")]
    InvalidImportFormat,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
