//! Scenario workflow: define a scored check and exercise the target devbox
//!
//! Steps:
//! 1. Create a scenario; the scorer is an opaque text payload forwarded
//!    verbatim to the service
//! 2. Start a run and record `ext-scenario-run-id`
//! 3. Re-upload the resources directory to the recorded devbox, overwrite
//!    the contact file, and re-run the verification script
//! 4. Attempt to mark the run complete
//!
//! Identifiers persisted before a later failure stay persisted; there is no
//! compensation.

use crate::workflows::resources::{remote_file_path, upload_directory};
use runbox_client::{CreateScenarioRequest, DevboxApi};
use runbox_core::{keys, Result};
use runbox_store::AnswersStore;
use std::path::PathBuf;

/// Options for the scenario workflow
#[derive(Debug, Clone)]
pub struct ScenarioOptions {
    /// Name of the scored check
    pub name: String,
    pub description: Option<String>,
    /// Opaque scorer payload, interpreted only by the remote service
    pub scorer: String,
    /// Local directory re-uploaded for the run
    pub resources_dir: PathBuf,
    pub remote_prefix: String,
    pub contact_file: String,
    pub interpreter: String,
    pub script: String,
}

/// Result of a completed scenario workflow
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub run_id: String,
    pub exit_code: i64,
    pub stdout: String,
    /// Whether the completion call went through
    pub completed: bool,
}

/// Run the scenario workflow
pub fn scenario(
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
    options: &ScenarioOptions,
) -> Result<ScenarioResult> {
    answers.require(keys::API_KEY)?;
    let devbox_id = answers.require(keys::DEVBOX_ID)?.to_string();

    tracing::info!(name = %options.name, "creating scenario");
    let scenario = client.create_scenario(&CreateScenarioRequest {
        name: options.name.clone(),
        description: options.description.clone(),
        scorer: options.scorer.clone(),
    })?;

    let run = client.start_scenario_run(&scenario.id)?;
    answers.set(keys::EXT_SCENARIO_RUN_ID, run.id.as_str())?;

    let uploaded = upload_directory(client, &devbox_id, &options.resources_dir, &options.remote_prefix)?;
    tracing::info!(count = uploaded.len(), "resources re-uploaded for run");

    // The contact file carries the identity the scorer looks for; skip the
    // overwrite when no identity was ever recorded.
    if let Some(identity) = answers.get(keys::DEVBOX_NAME).map(str::to_string) {
        let contact_path = remote_file_path(&options.remote_prefix, &options.contact_file);
        client.write_file(&devbox_id, &contact_path, &identity)?;
    } else {
        tracing::debug!("no identity recorded, leaving contact file as uploaded");
    }

    let command = format!(
        "{} {}",
        options.interpreter,
        remote_file_path(&options.remote_prefix, &options.script)
    );
    let execution = client.execute_command(&devbox_id, &command)?;
    tracing::info!(exit_code = execution.exit_code, "verification script executed");

    client.complete_scenario_run(&run.id)?;

    Ok(ScenarioResult {
        scenario_id: scenario.id,
        run_id: run.id,
        exit_code: execution.exit_code,
        stdout: execution.stdout,
        completed: true,
    })
}
