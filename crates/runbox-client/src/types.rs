//! Typed views of remote resources
//!
//! The service owns these resources; locally they are only recorded and
//! passed back. Unknown response fields are ignored so minor service-side
//! additions don't break the workflows.

use serde::{Deserialize, Serialize};

/// Devbox status the service reports while a create is settling
pub const STATUS_RUNNING: &str = "running";
/// Terminal status a failed provision ends in
pub const STATUS_FAILURE: &str = "failure";

/// A remotely provisioned compute sandbox
#[derive(Debug, Clone, Deserialize)]
pub struct Devbox {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl Devbox {
    /// Whether the devbox is ready for file writes and command execution
    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }
}

/// A named, reusable image definition
#[derive(Debug, Clone, Deserialize)]
pub struct Blueprint {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A point-in-time capture of a devbox's disk
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A named scored check definition
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One execution of a scenario against a target
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRun {
    pub id: String,
    #[serde(default)]
    pub state: String,
}

/// Captured outcome of a synchronously executed shell command
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionResult {
    #[serde(default, alias = "exit_status")]
    pub exit_code: i64,
    #[serde(default, alias = "output")]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

/// Request body for creating a devbox
#[derive(Debug, Clone, Serialize)]
pub struct CreateDevboxRequest {
    pub name: String,
    /// Boot from this blueprint instead of the service's default image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
}

/// Request body for creating a blueprint
#[derive(Debug, Clone, Serialize)]
pub struct CreateBlueprintRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered provisioning commands baked into the image
    pub system_setup_commands: Vec<String>,
}

/// Request body for creating a scenario
///
/// The scorer is an opaque text payload interpreted entirely by the remote
/// service; it is forwarded verbatim and never executed locally.
#[derive(Debug, Clone, Serialize)]
pub struct CreateScenarioRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scorer: String,
}

/// List endpoint envelope
#[derive(Debug, Deserialize)]
pub(crate) struct DevboxList {
    #[serde(default)]
    pub devboxes: Vec<Devbox>,
}
