//! Lexical path relativization.
//!
//! `lexical(base, other)` returns the path `r` such that joining `base` and `r`
//! names `other`: shared leading components are dropped, each remaining
//! component of `base` becomes `..`, then the rest of `other` follows.
//! Both inputs are normalized first (`.` dropped, `name/..` folded). Nothing
//! touches the filesystem, so `..` through a symlink is folded lexically.
//!
//! When there is no common anchor (one path absolute and the other relative,
//! or a `..` left in the unshared part of `base`), the result is the plain
//! components of `other`.

use std::path::{Component, Path, PathBuf};

pub(crate) fn lexical(base: &Path, other: &Path) -> PathBuf {
    let base_parts = normalize(base);
    let other_parts = normalize(other);

    let shared = base_parts
        .iter()
        .zip(other_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let unanchored = base.has_root() != other.has_root()
        || base_parts[shared..].contains(&Component::ParentDir);
    if unanchored {
        return other_parts
            .iter()
            .filter(|c| matches!(c, Component::Normal(_)))
            .map(|c| c.as_os_str())
            .collect();
    }

    let mut out = PathBuf::new();
    for _ in shared..base_parts.len() {
        out.push(Component::ParentDir.as_os_str());
    }
    for part in &other_parts[shared..] {
        out.push(part.as_os_str());
    }
    out
}

/// Components of `path` with `.` removed and each `name/..` pair folded.
/// A `..` directly under the root is dropped; leading `..` of a relative path stay.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out
}
