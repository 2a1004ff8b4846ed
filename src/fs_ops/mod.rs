//! Filesystem operations: clone and clear directory trees.

mod clear;
mod clone;
mod ensure;
mod helpers;
mod io_copy;
pub(crate) mod relativize;

pub use clear::clear_contents;
pub use clone::{clone_contents, CloneReport, VisitFailure};
pub use ensure::ensure_is_directory;
pub use helpers::io_failure;
