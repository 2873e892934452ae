//! Error handling for quotemill.
//!
//! Parsing and classification never fail; every error here comes from the
//! I/O boundary (reading the export, cleaning and writing the output
//! directory, loading config).

mod codes;

use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for quotemill operations.
#[derive(Error, Debug)]
pub enum QmError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to clean {}: {source}", .path.display())]
    CleanOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QmError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Yaml(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::InputNotFound(_) => ErrorCode::InputNotFound,
            Self::ReadInput { .. } => ErrorCode::InputUnreadable,
            Self::WriteOutput { .. } => ErrorCode::StorageWriteError,
            Self::CleanOutput { .. } => ErrorCode::StorageCleanError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::InputNotFound(path)
            | Self::ReadInput { path, .. }
            | Self::WriteOutput { path, .. }
            | Self::CleanOutput { path, .. } => Some(serde_json::json!({ "path": path })),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QmError>;
