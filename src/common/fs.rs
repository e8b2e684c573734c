//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{Result, copy_failed, remove_failed, write_failed};

/// Copy a directory recursively, creating `dst` when missing.
///
/// Existing files under `dst` are overwritten without asking. Symlinks to
/// files are copied as regular files; other symlinks are not followed.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| write_failed(dst, &e))?;

    for entry in fs::read_dir(src).map_err(|e| copy_failed(src, dst, &e))? {
        let entry = entry.map_err(|e| copy_failed(src, dst, &e))?;
        let entry_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| copy_failed(&entry_path, &dst_path, &e))?;

        if file_type.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else if file_type.is_symlink() && !entry_path.is_file() {
            continue;
        } else {
            copy_file(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Copy a single file, overwriting `dst`.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| copy_failed(src, dst, &e))
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| write_failed(path, &e))
}

/// Remove a directory tree. A missing directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(remove_failed(path, &e)),
    }
}

/// Whether `path` is a directory with at least one entry.
pub fn has_entries(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
