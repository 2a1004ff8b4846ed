//! Core library for `folder_ops`.
//!
//! Two directory-tree operations and their shared precondition:
//! - `clone_contents` copies everything under one directory into another.
//! - `clear_contents` deletes the contents of a directory and returns the
//!   entries that could not be removed.
//! - `ensure_is_directory` rejects paths that are not existing directories.
//!
//! Behaviour is selected per call with a `FolderOptions` value.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;

pub use config::{FolderOption, FolderOptions, LogLevel, Relativization, VisitErrorPolicy};
pub use errors::{FolderError, Result};
pub use fs_ops::{clear_contents, clone_contents, ensure_is_directory, CloneReport, VisitFailure};
