//! Error types for table annotation runs
//!
//! Only I/O and configuration problems are errors. Malformed markup is
//! absorbed by the parser and never surfaces here.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for annotation operations
pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Error types for annotation operations
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Input file missing or unreadable
    #[error("Failed to read input HTML file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit
    #[error(
        "Input HTML file {} is too large: {size} bytes (limit: {limit} bytes)",
        .path.display()
    )]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: usize,
    },

    /// Output file could not be created or written
    #[error("Failed to write output HTML file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the annotated DOM failed
    #[error("Failed to serialize annotated HTML: {0}")]
    Serialize(#[source] std::io::Error),

    /// Serializer produced bytes that are not valid UTF-8
    #[error("Serialized HTML is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration values rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AnnotateError {
    fn from(error: anyhow::Error) -> Self {
        AnnotateError::Other(error.to_string())
    }
}

impl AnnotateError {
    /// Path of the file involved in the failure, if any
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AnnotateError::InputRead { path, .. }
            | AnnotateError::InputTooLarge { path, .. }
            | AnnotateError::OutputWrite { path, .. }
            | AnnotateError::ConfigRead { path, .. }
            | AnnotateError::ConfigFile { path, .. } => Some(path),
            _ => None,
        }
    }
}
