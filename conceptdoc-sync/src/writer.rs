//! Atomic note writer.
//!
//! ## `atomic_write` protocol
//!
//! 1. Render content (already done by caller).
//! 2. Write to `<path>.conceptdoc.tmp`.
//! 3. Rename to final path (atomic on POSIX), replacing any existing file.
//!
//! Every call rewrites the note, even when the bytes on disk already match.
//! A failed rename removes the `.tmp` and leaves the previous file intact.

use std::path::{Path, PathBuf};

use crate::error::{io_err, GenerateError};

/// Atomically write `content` to `path`.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), GenerateError> {
    let tmp = PathBuf::from(format!("{}.conceptdoc.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
