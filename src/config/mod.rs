//! Config module.
//! Per-call option values for the directory operations and the log level type.
//! Nothing here is persisted or read from the environment.

pub mod types;

pub use types::{FolderOption, FolderOptions, LogLevel, Relativization, VisitErrorPolicy};
