//! Clone the contents of one directory into another.
//!
//! Two walks, selected by `FolderOption::UseRecursion`:
//! - flat (default): one walk following symlinks; every entry is copied and
//!   failures follow the visit-error policy (Abort by default).
//! - recursive: symlinks are not followed; directory copies always propagate
//!   their failure, file copies follow the policy (Skip by default).
//!
//! The source root maps onto the destination root, which must already exist,
//! so it is never copied itself.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::types::{FolderOptions, VisitErrorPolicy};
use crate::errors::{FolderError, Result};

use super::ensure::ensure_is_directory;
use super::helpers::{copy_failure, walk_failure};
use super::io_copy::{copy_entry, Copied};

/// One entry whose visit failed and was skipped or collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitFailure {
    /// Source entry (or the walk path when the entry could not be read).
    pub path: PathBuf,
    /// User-facing error text.
    pub message: String,
}

/// Outcome of one `clone_contents` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneReport {
    /// Entries created under the destination (directories and files).
    pub copied: u64,
    /// Failed visits that were skipped or collected.
    pub skipped: u64,
    /// Failures recorded under `VisitErrorPolicy::Collect`, in walk order.
    pub failures: Vec<VisitFailure>,
}

impl CloneReport {
    fn absorb(&mut self, policy: VisitErrorPolicy, err: FolderError) -> Result<()> {
        match policy {
            VisitErrorPolicy::Abort => Err(err),
            VisitErrorPolicy::Skip => {
                warn!(path = %err.path().display(), error = %err, "skipping entry that failed to clone");
                self.skipped += 1;
                Ok(())
            }
            VisitErrorPolicy::Collect => {
                debug!(path = %err.path().display(), error = %err, "recording entry that failed to clone");
                self.skipped += 1;
                self.failures.push(VisitFailure {
                    path: err.path().to_path_buf(),
                    message: err.to_string(),
                });
                Ok(())
            }
        }
    }
}

/// Copy every entry under `source` into its relativized location under `destination`.
///
/// Both paths must be existing directories. Existing destination entries are
/// never overwritten; see `FolderOptions` for how failures and paths are handled.
pub fn clone_contents(
    source: &Path,
    destination: &Path,
    options: &FolderOptions,
) -> Result<CloneReport> {
    ensure_is_directory(source)?;
    ensure_is_directory(destination)?;

    let report = if options.use_recursion {
        clone_recursive(source, destination, options)?
    } else {
        clone_flat(source, destination, options)?
    };

    info!(
        src = %source.display(),
        dest = %destination.display(),
        copied = report.copied,
        skipped = report.skipped,
        recursive = options.use_recursion,
        "Cloned directory contents"
    );
    Ok(report)
}

fn walker(source: &Path, follow_links: bool) -> walkdir::IntoIter {
    WalkDir::new(source)
        .min_depth(1)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter()
}

fn clone_flat(source: &Path, destination: &Path, options: &FolderOptions) -> Result<CloneReport> {
    let policy = options.visit_error_policy();
    let mut report = CloneReport::default();

    for item in walker(source, true) {
        let outcome = match item {
            Ok(entry) => copy_one(source, destination, options, &entry),
            Err(e) => Err(walk_failure(source, e)),
        };
        match outcome {
            Ok(()) => report.copied += 1,
            Err(err) => report.absorb(policy, err)?,
        }
    }
    Ok(report)
}

fn clone_recursive(
    source: &Path,
    destination: &Path,
    options: &FolderOptions,
) -> Result<CloneReport> {
    let policy = options.visit_error_policy();
    let mut report = CloneReport::default();

    for item in walker(source, false) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                report.absorb(policy, walk_failure(source, e))?;
                continue;
            }
        };

        if entry.file_type().is_dir() {
            copy_one(source, destination, options, &entry)?;
            report.copied += 1;
            continue;
        }

        match copy_one(source, destination, options, &entry) {
            Ok(()) => report.copied += 1,
            Err(err) => report.absorb(policy, err)?,
        }
    }
    Ok(report)
}

fn copy_one(
    source: &Path,
    destination: &Path,
    options: &FolderOptions,
    entry: &DirEntry,
) -> Result<()> {
    let target = target_path(source, destination, options, entry.path());
    let copied = copy_entry(entry.path(), &target)
        .map_err(|e| copy_failure(entry.path(), &target, e))?;
    match copied {
        Copied::Directory => {
            debug!(src = %entry.path().display(), dest = %target.display(), "created directory")
        }
        Copied::File { bytes } => {
            debug!(src = %entry.path().display(), dest = %target.display(), bytes, "copied file")
        }
    }
    Ok(())
}

fn target_path(source: &Path, destination: &Path, options: &FolderOptions, entry: &Path) -> PathBuf {
    let relative = options.relativization.relative_path(source, entry);
    if relative.as_os_str().is_empty() {
        destination.to_path_buf()
    } else {
        destination.join(relative)
    }
}
