//! Core configuration types.
//! - FolderOptions is the per-call option value passed to clone/clear.
//! - Relativization and VisitErrorPolicy are the two injectable policies it carries.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use crate::fs_ops::relativize;

/// Flag members accepted by clone/clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderOption {
    /// Descend into subdirectories with explicit pre/post directory steps.
    UseRecursion,
}

/// How a source entry is mapped to a path relative to the destination root.
#[derive(Debug, Clone, Copy, Default)]
pub enum Relativization {
    /// Relative path from the entry to the bare file name of the source
    /// directory. Mixing an absolute entry with the relative name yields the
    /// name itself, so every entry of an absolute source lands on
    /// `<destination>/<source name>`.
    #[default]
    SourceName,
    /// Entry path relative to the source root (a plain tree copy).
    SourceRoot,
    /// Caller supplied mapping: `(source, entry) -> relative path`.
    Custom(fn(&Path, &Path) -> PathBuf),
}

impl Relativization {
    /// Relative path under the destination for `entry`, found while walking `source`.
    pub fn relative_path(&self, source: &Path, entry: &Path) -> PathBuf {
        match self {
            Relativization::SourceName => {
                let name = source.file_name().map(Path::new).unwrap_or(Path::new(""));
                relativize::lexical(entry, name)
            }
            Relativization::SourceRoot => match entry.strip_prefix(source) {
                Ok(rel) => rel.to_path_buf(),
                // Not under the root (should not happen for walk entries); keep only the name.
                Err(_) => entry
                    .components()
                    .next_back()
                    .filter(|c| matches!(c, Component::Normal(_)))
                    .map(|c| PathBuf::from(c.as_os_str()))
                    .unwrap_or_default(),
            },
            Relativization::Custom(f) => f(source, entry),
        }
    }
}

/// What a traversal does when visiting one entry fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitErrorPolicy {
    /// Stop the walk and return the failure.
    Abort,
    /// Log the failure and continue.
    Skip,
    /// Record the failure in the report and continue.
    Collect,
}

/// Per-call options for `clone_contents` / `clear_contents`.
///
/// The default value is the empty flag set: non-recursive behaviour, the
/// `SourceName` relativization and the mode's default visit-error policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderOptions {
    /// `FolderOption::UseRecursion` is set
    pub use_recursion: bool,
    /// Source entry -> destination mapping
    pub relativization: Relativization,
    /// Overrides the clone visit-error policy (Abort non-recursive, Skip recursive)
    pub visit_errors: Option<VisitErrorPolicy>,
}

impl FolderOptions {
    /// Options with `UseRecursion` set.
    pub fn recursive() -> Self {
        Self {
            use_recursion: true,
            ..Default::default()
        }
    }

    /// Build options from a list of flags; duplicates are harmless.
    pub fn from_flags<I: IntoIterator<Item = FolderOption>>(flags: I) -> Self {
        let mut opts = Self::default();
        for flag in flags {
            match flag {
                FolderOption::UseRecursion => opts.use_recursion = true,
            }
        }
        opts
    }

    pub fn contains(&self, flag: FolderOption) -> bool {
        match flag {
            FolderOption::UseRecursion => self.use_recursion,
        }
    }

    pub fn with_relativization(self, relativization: Relativization) -> Self {
        Self {
            relativization,
            ..self
        }
    }

    pub fn with_visit_errors(self, policy: VisitErrorPolicy) -> Self {
        Self {
            visit_errors: Some(policy),
            ..self
        }
    }

    /// Policy applied to failed entry visits during a clone.
    pub fn visit_error_policy(&self) -> VisitErrorPolicy {
        self.visit_errors.unwrap_or(if self.use_recursion {
            VisitErrorPolicy::Skip
        } else {
            VisitErrorPolicy::Abort
        })
    }
}

impl FromIterator<FolderOption> for FolderOptions {
    fn from_iter<I: IntoIterator<Item = FolderOption>>(iter: I) -> Self {
        Self::from_flags(iter)
    }
}

impl From<&[FolderOption]> for FolderOptions {
    fn from(flags: &[FolderOption]) -> Self {
        Self::from_flags(flags.iter().copied())
    }
}

/// Program-defined verbosity levels for `logging::init_tracing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Operation summaries (default)
    #[default]
    Normal,
    /// Per-entry events
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}
