//! Atomic write primitive
//!
//! Uses temp→rename so a crash mid-write can never leave a truncated
//! answers document behind.

use runbox_core::{Result, RunboxError};
use std::fs;
use std::path::Path;

/// Atomically replace the contents of a file
///
/// Writes to a sibling temp file, then renames over the target. Parent
/// directories are created if needed.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RunboxError::from_io("create_parent_dir", e))?;
        }
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| RunboxError::from_io("write_answers_temp", e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| RunboxError::from_io("rename_answers_temp", e))?;

    Ok(())
}
