//! Precondition shared by clone and clear.

use std::path::{Path, PathBuf};

use crate::errors::{FolderError, Result};

/// Fail with `NotADirectory` unless `path` currently names an existing directory.
///
/// Symlinks are followed. The check does not reserve the path; it can change
/// between this call and later use.
pub fn ensure_is_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    Err(FolderError::NotADirectory(absolute_for_display(path)))
}

// Lexical only: the path may not exist, so canonicalize is not an option.
fn absolute_for_display(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    dunce::simplified(&abs).to_path_buf()
}
