//! Checkpoint workflow: snapshot the devbox after operations
//!
//! Given the recorded devbox id, create a named disk snapshot and record its
//! id. The snapshot lives independently of the devbox.

use runbox_client::DevboxApi;
use runbox_core::{keys, Result};
use runbox_store::AnswersStore;

/// Options for the checkpoint workflow
#[derive(Debug, Clone, Default)]
pub struct CheckpointOptions {
    /// Snapshot name; derived from the devbox name when not given
    pub name: Option<String>,
}

/// Result of a completed checkpoint workflow
#[derive(Debug, Clone)]
pub struct CheckpointResult {
    pub snapshot_id: String,
    pub snapshot_name: String,
}

/// Run the checkpoint workflow
pub fn checkpoint(
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
    options: &CheckpointOptions,
) -> Result<CheckpointResult> {
    answers.require(keys::API_KEY)?;
    let devbox_id = answers.require(keys::DEVBOX_ID)?.to_string();

    let name = match &options.name {
        Some(name) => name.clone(),
        None => {
            let owner = answers.get(keys::DEVBOX_NAME).unwrap_or(devbox_id.as_str());
            format!("snapshot-after-operations-{}", owner)
        }
    };

    tracing::info!(devbox_id = %devbox_id, name = %name, "creating snapshot");
    let snapshot = client.create_snapshot(&devbox_id, &name)?;

    answers.set(keys::SNAPSHOT_ID, snapshot.id.as_str())?;

    Ok(CheckpointResult {
        snapshot_id: snapshot.id,
        snapshot_name: snapshot.name,
    })
}
