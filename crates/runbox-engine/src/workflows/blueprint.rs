//! Blueprint workflow: define a reusable image and verify it boots
//!
//! Steps:
//! 1. Create a blueprint from an ordered list of provisioning commands
//! 2. Record `blueprint-name` and `blueprint-id`
//! 3. Boot a fresh devbox from the blueprint and await `running`
//! 4. Record `devbox-from-blueprint-name` and `devbox-from-blueprint-id`
//! 5. Run one verification command and capture its output

use runbox_client::{CreateBlueprintRequest, CreateDevboxRequest, DevboxApi};
use runbox_core::{keys, Result};
use runbox_store::AnswersStore;

/// Options for the blueprint workflow
#[derive(Debug, Clone)]
pub struct BlueprintOptions {
    /// Name of the image definition
    pub name: String,
    pub description: Option<String>,
    /// Provisioning commands baked into the image, in order
    pub setup_commands: Vec<String>,
    /// Name for the devbox booted to verify the image
    pub devbox_name: String,
    /// Command proving the provisioning took effect
    pub verify_command: String,
}

impl Default for BlueprintOptions {
    fn default() -> Self {
        Self {
            name: "cowsay-blueprint".into(),
            description: Some("Blueprint with cowsay utility installed".into()),
            setup_commands: vec![
                "apt-get update".into(),
                "apt-get install -y cowsay".into(),
            ],
            devbox_name: "cowsay-test-devbox".into(),
            verify_command: "cowsay 'Hello from runbox!'".into(),
        }
    }
}

/// Result of a completed blueprint workflow
#[derive(Debug, Clone)]
pub struct BlueprintResult {
    pub blueprint_id: String,
    pub blueprint_name: String,
    pub devbox_id: String,
    pub exit_code: i64,
    pub stdout: String,
}

/// Run the blueprint workflow
pub fn blueprint(
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
    options: &BlueprintOptions,
) -> Result<BlueprintResult> {
    answers.require(keys::API_KEY)?;

    tracing::info!(name = %options.name, "creating blueprint");
    let blueprint = client.create_blueprint(&CreateBlueprintRequest {
        name: options.name.clone(),
        description: options.description.clone(),
        system_setup_commands: options.setup_commands.clone(),
    })?;

    answers.set(keys::BLUEPRINT_NAME, blueprint.name.as_str())?;
    answers.set(keys::BLUEPRINT_ID, blueprint.id.as_str())?;

    tracing::info!(blueprint_id = %blueprint.id, "booting devbox from blueprint");
    let created = client.create_devbox(&CreateDevboxRequest {
        name: options.devbox_name.clone(),
        blueprint_id: Some(blueprint.id.clone()),
    })?;
    let running = client.await_running(&created.id)?;

    answers.set(keys::DEVBOX_FROM_BLUEPRINT_NAME, running.name.as_str())?;
    answers.set(keys::DEVBOX_FROM_BLUEPRINT_ID, running.id.as_str())?;

    let execution = client.execute_command(&running.id, &options.verify_command)?;
    tracing::info!(exit_code = execution.exit_code, "verification command executed");

    Ok(BlueprintResult {
        blueprint_id: blueprint.id,
        blueprint_name: blueprint.name,
        devbox_id: running.id,
        exit_code: execution.exit_code,
        stdout: execution.stdout,
    })
}
