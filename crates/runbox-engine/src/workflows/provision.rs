//! Provision workflow: create a devbox and record its identity
//!
//! Steps:
//! 1. Create a devbox under the configured name
//! 2. Await `running`
//! 3. Record `devbox-name` and `devbox-id` (the values the service
//!    returned, not the requested ones)

use runbox_client::{CreateDevboxRequest, DevboxApi};
use runbox_core::{keys, Result};
use runbox_store::AnswersStore;

/// Options for the provision workflow
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Name to provision the devbox under
    pub name: String,
}

/// Result of a completed provision workflow
#[derive(Debug, Clone)]
pub struct ProvisionResult {
    pub devbox_id: String,
    pub devbox_name: String,
    pub status: String,
}

/// Run the provision workflow
pub fn provision(
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
    options: &ProvisionOptions,
) -> Result<ProvisionResult> {
    answers.require(keys::API_KEY)?;

    tracing::info!(name = %options.name, "provisioning devbox");
    let created = client.create_devbox(&CreateDevboxRequest {
        name: options.name.clone(),
        blueprint_id: None,
    })?;

    let running = client.await_running(&created.id)?;

    answers.set(keys::DEVBOX_NAME, running.name.as_str())?;
    answers.set(keys::DEVBOX_ID, running.id.as_str())?;

    Ok(ProvisionResult {
        devbox_id: running.id,
        devbox_name: running.name,
        status: running.status,
    })
}
