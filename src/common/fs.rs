//! Filesystem helpers

use std::fs;
use std::path::Path;

use super::error::{ConfError, Result};

/// Check that a directory exists
///
/// Returns [`ConfError::NotADirectory`] when the path is missing or points at
/// something other than a directory.
pub fn check_dir_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ConfError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Read a resource file to a string
///
/// Errors carry the offending path.
pub fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConfError::ResourceRead {
        path: path.to_path_buf(),
        source,
    })
}
