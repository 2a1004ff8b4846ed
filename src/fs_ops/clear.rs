//! Clear the contents of a directory tree, collecting what could not be removed.
//!
//! Without `UseRecursion` only the target itself is tried, as a leaf.
//! With it, the tree is walked depth-first (following symlinks): files are
//! removed as they are met and each directory is removed after its children,
//! so deletion runs bottom-up. A directory that is empty (or unreadable) when
//! first visited is skipped entirely and left in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::types::FolderOptions;
use crate::errors::Result;

use super::ensure::ensure_is_directory;
use super::helpers::describe;

/// Delete the contents of `target`; return the entries that could not be deleted.
///
/// Individual deletion failures never fail the call. The only error is the
/// precondition: `target` must be an existing directory.
pub fn clear_contents(target: &Path, options: &FolderOptions) -> Result<Vec<PathBuf>> {
    ensure_is_directory(target)?;

    let mut walk = ClearWalk::default();
    if options.use_recursion {
        walk.visit_dir(target);
    } else {
        walk.remove_leaf_dir(target);
    }

    info!(
        target = %target.display(),
        removed = walk.removed,
        undeletable = walk.undeletable.len(),
        recursive = options.use_recursion,
        "Cleared directory contents"
    );
    Ok(walk.undeletable)
}

#[derive(Default)]
struct ClearWalk {
    undeletable: Vec<PathBuf>,
    removed: u64,
    // Canonical paths of the directories currently being descended.
    ancestors: Vec<PathBuf>,
}

impl ClearWalk {
    fn visit_dir(&mut self, dir: &Path) {
        let canonical = match fs::canonicalize(dir) {
            Ok(p) => p,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "cannot resolve directory; skipping");
                return;
            }
        };
        if self.ancestors.contains(&canonical) {
            debug!(path = %dir.display(), "symlink loop; skipping");
            return;
        }

        let children = match list_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "cannot list directory; skipping");
                return;
            }
        };
        if children.is_empty() {
            return;
        }

        self.ancestors.push(canonical);
        for child in &children {
            if fs::metadata(child).map(|m| m.is_dir()).unwrap_or(false) {
                self.visit_dir(child);
            } else {
                self.remove_file(child);
            }
        }
        self.ancestors.pop();

        self.remove_leaf_dir(dir);
    }

    fn remove_file(&mut self, path: &Path) {
        match fs::remove_file(path) {
            Ok(()) => {
                self.removed += 1;
                debug!(path = %path.display(), "removed file");
            }
            Err(e) => self.record(path, "remove file", &e),
        }
    }

    fn remove_leaf_dir(&mut self, dir: &Path) {
        match remove_dir_or_link(dir) {
            Ok(()) => {
                self.removed += 1;
                debug!(path = %dir.display(), "removed directory");
            }
            Err(e) => self.record(dir, "remove directory", &e),
        }
    }

    fn record(&mut self, path: &Path, op: &str, e: &io::Error) {
        debug!(error = %describe(op, path, e), "undeletable entry");
        self.undeletable.push(path.to_path_buf());
    }
}

/// Children of `dir`, sorted by file name. The directory handle is closed on return.
fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}

/// A symlinked directory is removed by unlinking the link, not its target.
fn remove_dir_or_link(dir: &Path) -> io::Result<()> {
    let is_link = fs::symlink_metadata(dir)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return fs::remove_dir(dir);
    }
    // Windows directory links need remove_dir.
    fs::remove_file(dir).or_else(|_| fs::remove_dir(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn list_dir_is_sorted() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("b").touch().unwrap();
        temp.child("a").touch().unwrap();
        temp.child("c").create_dir_all().unwrap();

        let names: Vec<_> = list_dir(temp.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn flat_clear_removes_empty_target() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child("empty");
        target.create_dir_all().unwrap();

        let left = clear_contents(target.path(), &FolderOptions::default()).unwrap();
        assert!(left.is_empty());
        assert!(!target.path().exists());
    }

    #[test]
    fn recursive_clear_leaves_empty_target_in_place() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child("empty");
        target.create_dir_all().unwrap();

        let left = clear_contents(target.path(), &FolderOptions::recursive()).unwrap();
        assert!(left.is_empty());
        assert!(target.path().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_emptied_then_unlinked() {
        let temp = assert_fs::TempDir::new().unwrap();
        let real = temp.child("real");
        real.child("inner.txt").write_str("x").unwrap();
        let target = temp.child("target");
        target.create_dir_all().unwrap();
        std::os::unix::fs::symlink(real.path(), target.path().join("link")).unwrap();

        let left = clear_contents(target.path(), &FolderOptions::recursive()).unwrap();
        assert!(left.is_empty(), "left: {left:?}");
        assert!(!target.path().exists());
        assert!(real.path().is_dir(), "link target directory itself is kept");
        assert!(!real.child("inner.txt").path().exists());
    }
}
