//! Resource upload shared by the operate and scenario workflows
//!
//! Walks a local directory and writes every file into the devbox verbatim
//! under a fixed remote prefix. Traversal order is sorted so upload order is
//! deterministic.

use runbox_client::DevboxApi;
use runbox_core::{Result, RunboxError};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Upload every file under `local_dir` into the devbox below `remote_prefix`
///
/// Subdirectory structure is preserved; path separators are normalized to
/// `/` for the remote side. Returns the remote paths written.
pub fn upload_directory(
    client: &dyn DevboxApi,
    devbox_id: &str,
    local_dir: &Path,
    remote_prefix: &str,
) -> Result<Vec<String>> {
    if !local_dir.is_dir() {
        return Err(RunboxError::Io {
            op: "read_resources".into(),
            message: format!("resources directory not found: {}", local_dir.display()),
        });
    }

    let mut uploaded = Vec::new();
    for entry in WalkDir::new(local_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = entry.map_err(|e| RunboxError::Io {
            op: "read_resources".into(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let contents = fs::read_to_string(entry.path())
            .map_err(|e| RunboxError::from_io("read_resource_file", e))?;

        let relative = entry
            .path()
            .strip_prefix(local_dir)
            .map_err(|e| RunboxError::Io {
                op: "read_resources".into(),
                message: e.to_string(),
            })?;
        let remote_path = remote_file_path(remote_prefix, &relative.to_string_lossy());

        client.write_file(devbox_id, &remote_path, &contents)?;
        tracing::debug!(remote_path = %remote_path, "uploaded resource file");
        uploaded.push(remote_path);
    }

    Ok(uploaded)
}

/// Join a remote prefix and a relative path with `/` separators
pub fn remote_file_path(remote_prefix: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        remote_prefix.trim_end_matches('/'),
        relative.replace('\\', "/")
    )
}
