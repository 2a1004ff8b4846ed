//! Single-entry copy primitive used by the clone walk.
//!
//! - Symlinks on the source side are followed.
//! - A directory becomes a newly created, empty directory.
//! - Anything else is streamed into a newly created file (`create_new`, so an
//!   existing destination is never clobbered and fails with `AlreadyExists`).

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// What `copy_entry` produced at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Copied {
    Directory,
    File { bytes: u64 },
}

pub(crate) fn copy_entry(src: &Path, dst: &Path) -> io::Result<Copied> {
    let meta = fs::metadata(src)?;
    if meta.is_dir() {
        fs::create_dir(dst)?;
        return Ok(Copied::Directory);
    }
    let bytes = copy_streaming(src, dst)?;
    Ok(Copied::File { bytes })
}

/// Copy `src` -> `dst` with buffered I/O; `dst` must not exist yet.
fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    const BUF_SIZE: usize = 256 * 1024;

    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}
