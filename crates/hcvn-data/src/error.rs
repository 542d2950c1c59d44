//! Error types for loading bundled division data.

use std::path::PathBuf;
use thiserror::Error;

use hcvn_model::RecordError;

/// Coarse classification of a [`DataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A backing file or directory is missing, unreadable, or not valid JSON.
    DataLoad,
    /// A parsed object lacks the fields its record type requires.
    MalformedRecord,
}

/// Errors that can occur while loading provinces, districts or wards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    // === File System Errors ===
    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// File content is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File is valid JSON but its top level is not an object.
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },

    // === Record Errors ===
    /// An entry could not be built into its record type.
    #[error("malformed record '{key}' in {path}: {source}")]
    MalformedRecord {
        path: PathBuf,
        key: String,
        #[source]
        source: RecordError,
    },
}

impl DataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            _ => ErrorKind::DataLoad,
        }
    }

    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryRead { path, .. }
            | Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::JsonParse { path, .. }
            | Self::NotAnObject { path }
            | Self::MalformedRecord { path, .. } => path,
        }
    }
}

/// Result type for data loading operations.
pub type Result<T> = std::result::Result<T, DataError>;
