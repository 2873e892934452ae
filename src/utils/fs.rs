//! Filesystem utilities.
//!
//! Helper functions for file operations. Every failure is wrapped with the
//! path that caused it.

use std::path::Path;

use crate::error::{QmError, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| QmError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Read the export document, distinguishing a missing file from other failures.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(QmError::InputNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| QmError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
