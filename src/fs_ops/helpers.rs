//! I/O helper utilities.
//!
//! Turns an io::Error into a `FolderError::Io` whose message names the
//! operation and path and carries a platform-aware hint.
//!
//! Usage (as `walk_failure` does below):
//!   let err: FolderError = io_failure("walk", path)(io_err);
//! or, in a function returning `folder_ops::Result`:
//!   fs::remove_dir(dir).map_err(io_failure("remove directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::FolderError;

/// Hint keyed on the raw OS code, when we recognise it.
fn os_hint(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        let hint = match code {
            libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
            libc::EEXIST => "already exists; the destination is never overwritten",
            libc::ENOTEMPTY => "directory not empty; clear its contents first",
            libc::ENOENT => "path not found; verify it exists",
            libc::ENOTDIR => "a path component is not a directory",
            libc::EISDIR => "is a directory",
            libc::EBUSY => "resource busy; ensure no other process is using it",
            libc::ENOSPC => "insufficient space on device",
            libc::EROFS => "read-only filesystem; cannot write here",
            libc::ELOOP => "too many symbolic link levels (ELOOP); possible symlink cycle",
            libc::ENAMETOOLONG => "filename or path too long",
            libc::EMFILE => "process file descriptor limit reached",
            _ => return None,
        };
        Some(hint)
    }
    #[cfg(windows)]
    {
        let hint = match code {
            5 => "access denied; check permissions",
            32 => "sharing violation; file is in use",
            2 | 3 => "path not found; verify it exists",
            80 | 183 => "already exists; the destination is never overwritten",
            145 => "directory not empty; clear its contents first",
            112 => "insufficient disk space",
            _ => return None,
        };
        Some(hint)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

/// Hint keyed on the error kind, for errors without an OS code.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; the destination is never overwritten"),
        _ => None,
    }
}

/// "<op> '<path>': <error> (<hint>) [os code: N]"
pub(crate) fn describe(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(hint) = hint {
        msg.push_str(&format!(" ({hint})"));
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Wrap an io::Error into `FolderError::Io`; shaped for `.map_err(...)`.
pub fn io_failure<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> FolderError + 'a {
    move |e: io::Error| FolderError::Io {
        path: path.to_path_buf(),
        message: describe(op, path, &e),
        source: e,
    }
}

/// Copy failures are reported against the source entry.
pub(crate) fn copy_failure(src: &Path, dst: &Path, e: io::Error) -> FolderError {
    let op = format!("copy '{}' ->", src.display());
    FolderError::Io {
        path: src.to_path_buf(),
        message: describe(&op, dst, &e),
        source: e,
    }
}

/// Walk errors carry their own path; fall back to `root` when they don't.
pub(crate) fn walk_failure(root: &Path, e: walkdir::Error) -> FolderError {
    let path = e.path().unwrap_or(root).to_path_buf();
    io_failure("walk", &path)(io::Error::from(e))
}
