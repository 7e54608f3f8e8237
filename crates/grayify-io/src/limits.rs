//! Input size limits.
//!
//! Oversized files are rejected before any decode work is attempted. The
//! check runs against file metadata (or the byte length for in-memory
//! input), so a rejected file is never read into memory.

use crate::{IoError, IoResult};
use std::path::Path;

/// Maximum accepted input file size: 10 MB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Checks a file's size against [`MAX_FILE_SIZE`] without reading it.
///
/// Returns the file size on success.
///
/// # Errors
///
/// [`IoError::FileTooLarge`] if the file exceeds the limit, or an I/O error
/// if the metadata cannot be read.
pub fn check_file_size<P: AsRef<Path>>(path: P) -> IoResult<u64> {
    let size = std::fs::metadata(path.as_ref())?.len();
    check_len(size)?;
    Ok(size)
}

/// Checks an in-memory input length against [`MAX_FILE_SIZE`].
pub fn check_len(size: u64) -> IoResult<()> {
    if size > MAX_FILE_SIZE {
        return Err(IoError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
