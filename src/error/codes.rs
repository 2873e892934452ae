//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: Highlight export file does not exist
    InputNotFound,
    /// E102: Highlight export exists but could not be read
    InputUnreadable,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Generic filesystem read failure
    StorageReadError,
    /// E602: A quote file could not be written
    StorageWriteError,
    /// E603: The output directory could not be cleaned
    StorageCleanError,
    /// E605: Frontmatter or JSON serialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected I/O failure
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InputNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputNotFound => 101,
            Self::InputUnreadable => 102,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,
            Self::StorageReadError => 601,
            Self::StorageWriteError => 602,
            Self::StorageCleanError => 603,
            Self::SerializationError => 605,
            Self::IoError => 901,
        }
    }

    /// Get a short recovery hint for this error.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound => "Pass the export with `qm convert --input <file>` or set [input] path in quotemill.toml",
            Self::InputUnreadable => "Check that the export file is readable UTF-8 text",
            Self::ConfigInvalid => "Check TOML syntax in the config file and numeric QM_* environment variables",
            Self::ConfigMissingRequired => "Specify --config <path> or create ./quotemill.toml",
            Self::StorageReadError => "Check file permissions on the path in the error message",
            Self::StorageWriteError | Self::StorageCleanError => {
                "Check that the output directory is writable, or choose another with --output"
            }
            Self::SerializationError => "This is likely a bug; re-run with -vv and report the log",
            Self::IoError => "Re-run with -vv for details",
        }
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
