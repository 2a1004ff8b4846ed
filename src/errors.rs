//! Typed error definitions for folder_ops.
//! Two failure kinds: a precondition failure (the path is not a directory)
//! and an I/O failure raised by a copy or delete primitive.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolderError {
    /// The supplied path does not currently resolve to an existing directory.
    #[error("File at path '{}' is not a directory!", .0.display())]
    NotADirectory(PathBuf),

    /// An underlying filesystem operation failed.
    #[error("{message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },
}

impl FolderError {
    /// True for the precondition failure raised before any work is done.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FolderError::NotADirectory(_))
    }

    /// Kind of the wrapped io::Error, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FolderError::Io { source, .. } => Some(source.kind()),
            FolderError::NotADirectory(_) => None,
        }
    }

    /// Path the failure is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FolderError::NotADirectory(p) => p,
            FolderError::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolderError>;
