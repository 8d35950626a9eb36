//! Operate workflow: act on the provisioned devbox
//!
//! Steps:
//! 1. Resolve the devbox id — the recorded `devbox-id` if present, otherwise
//!    list devboxes, match by the recorded name, and persist the match
//! 2. Upload the local resources directory verbatim
//! 3. Overwrite the contact file with the configured identity
//! 4. Execute the interpreter against the uploaded script and capture output
//!
//! The resolution step is the only idempotent step in any workflow: it looks
//! up by name before anything is created.

use crate::workflows::resources::{remote_file_path, upload_directory};
use runbox_client::DevboxApi;
use runbox_core::{keys, Result, RunboxError};
use runbox_store::AnswersStore;
use std::path::PathBuf;

/// Options for the operate workflow
#[derive(Debug, Clone)]
pub struct OperateOptions {
    /// Local directory uploaded into the devbox
    pub resources_dir: PathBuf,
    /// Remote prefix the resources land under
    pub remote_prefix: String,
    /// File (relative to the prefix) whose contents are overwritten
    pub contact_file: String,
    /// Interpreter run against the uploaded script
    pub interpreter: String,
    /// Script (relative to the prefix) to execute
    pub script: String,
}

impl Default for OperateOptions {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from("resources"),
            remote_prefix: "/workspace/resources".into(),
            contact_file: "me.txt".into(),
            interpreter: "python3".into(),
            script: "test.py".into(),
        }
    }
}

/// Result of a completed operate workflow
#[derive(Debug, Clone)]
pub struct OperateResult {
    pub devbox_id: String,
    /// Remote paths written during the upload step
    pub uploaded: Vec<String>,
    pub exit_code: i64,
    pub stdout: String,
    pub stderr: String,
}

/// Resolve the target devbox id, recording it if it had to be looked up
fn resolve_devbox_id(client: &dyn DevboxApi, answers: &mut AnswersStore) -> Result<String> {
    if let Some(id) = answers.get(keys::DEVBOX_ID) {
        return Ok(id.to_string());
    }

    let name = answers.require(keys::DEVBOX_NAME)?.to_string();
    tracing::info!(name = %name, "devbox id not recorded, resolving by name");

    let devboxes = client.list_devboxes()?;
    let matched = devboxes
        .into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| {
            RunboxError::remote(
                "resolve_devbox",
                format!("no devbox named '{}' found", name),
            )
        })?;

    answers.set(keys::DEVBOX_ID, matched.id.as_str())?;
    Ok(matched.id)
}

/// Run the operate workflow
pub fn operate(
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
    options: &OperateOptions,
) -> Result<OperateResult> {
    answers.require(keys::API_KEY)?;
    let identity = answers.require(keys::DEVBOX_NAME)?.to_string();

    let devbox_id = resolve_devbox_id(client, answers)?;

    let uploaded = upload_directory(client, &devbox_id, &options.resources_dir, &options.remote_prefix)?;
    tracing::info!(count = uploaded.len(), "resources uploaded");

    let contact_path = remote_file_path(&options.remote_prefix, &options.contact_file);
    client.write_file(&devbox_id, &contact_path, &identity)?;

    let command = format!(
        "{} {}",
        options.interpreter,
        remote_file_path(&options.remote_prefix, &options.script)
    );
    let execution = client.execute_command(&devbox_id, &command)?;
    tracing::info!(exit_code = execution.exit_code, "script executed");

    Ok(OperateResult {
        devbox_id,
        uploaded,
        exit_code: execution.exit_code,
        stdout: execution.stdout,
        stderr: execution.stderr,
    })
}
