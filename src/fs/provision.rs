//! Directory provisioning.
//!
//! Creating a directory that already exists is not an error, and every
//! missing ancestor is created along the way.

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Ensure `path` exists as a directory, creating missing ancestors.
///
/// Idempotent: calling this twice with the same path succeeds both times.
///
/// # Returns
///
/// * `Ok(())` - The directory exists
/// * `Err(ScaffoldError::Filesystem)` - Permission or I/O failure, or a
///   non-directory already occupies the path
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    fs::create_dir_all(path)
        .map_err(|e| ScaffoldError::filesystem("create directory", path, e))?;

    Ok(())
}
