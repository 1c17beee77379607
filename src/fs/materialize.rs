//! File materialization.
//!
//! Writes rendered content to disk with a "last write wins" policy: an existing
//! file is truncated and replaced, never merged or backed up. Writes are not
//! atomic; a failed run may leave a partial file behind, which is acceptable
//! because generation targets a fresh destination.

use super::provision::ensure_dir;
use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Mode applied to generated scripts.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Write `content` to `path`, creating the parent directory first.
///
/// # Returns
///
/// * `Ok(())` - The file now holds exactly `content`
/// * `Err(ScaffoldError::Filesystem)` - The parent could not be created, or the
///   file could not be opened or written
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    // File::create truncates, so no bytes of a longer previous file survive.
    let mut file =
        File::create(path).map_err(|e| ScaffoldError::filesystem("create file", path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::filesystem("write file", path, e))?;

    Ok(())
}

/// Mark `path` as executable (mode 0755).
///
/// A no-op on platforms without Unix permission bits.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| ScaffoldError::filesystem("set permissions on", path, e))
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|_| ())
        .map_err(|e| ScaffoldError::filesystem("set permissions on", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("main.go");

        write_file(&file_path, "package main\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "package main\n");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test").join("file.txt");

        write_file(&file_path, "test content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_file_replaces_longer_content_fully() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("go.mod");

        fs::write(&file_path, "module something-much-longer\n\ngo 1.21\n").unwrap();
        write_file(&file_path, "module x\n").unwrap();

        let bytes = fs::read(&file_path).unwrap();
        assert_eq!(bytes, b"module x\n");
    }

    #[test]
    fn test_write_file_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        write_file(&file_path, "").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_write_file_onto_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("scripts");
        fs::create_dir(&dir_path).unwrap();

        let err = write_file(&dir_path, "content").unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_uses_default_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("README.md");

        write_file(&file_path, "# x\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0, "generated files must not be executable");
    }

    #[cfg(unix)]
    #[test]
    fn test_make_executable_sets_0755() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("proto-gen.sh");
        write_file(&file_path, "#!/bin/bash\n").unwrap();

        make_executable(&file_path).unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, EXECUTABLE_MODE);
    }

    #[test]
    fn test_make_executable_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = make_executable(temp_dir.path().join("missing.sh")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }
}
