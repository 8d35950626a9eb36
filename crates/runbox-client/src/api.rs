//! The remote service contract
//!
//! Workflows depend on this trait, never on the HTTP implementation
//! directly, so driver tests can substitute a canned stub.

use crate::types::{
    Blueprint, CreateBlueprintRequest, CreateDevboxRequest, CreateScenarioRequest, Devbox,
    ExecutionResult, Scenario, ScenarioRun, Snapshot,
};
use runbox_core::Result;

/// Operations the workflows invoke against the devbox service
///
/// All calls are synchronous and blocking; a failure surfaces as
/// `RemoteOperationFailed` carrying the operation name and the service's
/// message.
pub trait DevboxApi {
    /// Create a compute sandbox; the returned view may still be provisioning
    fn create_devbox(&self, req: &CreateDevboxRequest) -> Result<Devbox>;

    /// Block until the devbox reports `running`
    fn await_running(&self, devbox_id: &str) -> Result<Devbox>;

    /// List all sandboxes visible to the credential
    fn list_devboxes(&self) -> Result<Vec<Devbox>>;

    /// Write a file into a sandbox by absolute path
    fn write_file(&self, devbox_id: &str, path: &str, contents: &str) -> Result<()>;

    /// Execute a shell command in a sandbox and capture its outcome
    fn execute_command(&self, devbox_id: &str, command: &str) -> Result<ExecutionResult>;

    /// Create a point-in-time snapshot of a sandbox
    fn create_snapshot(&self, devbox_id: &str, name: &str) -> Result<Snapshot>;

    /// Create a reusable image definition from provisioning commands
    fn create_blueprint(&self, req: &CreateBlueprintRequest) -> Result<Blueprint>;

    /// Create a named scored check; the scorer payload is opaque
    fn create_scenario(&self, req: &CreateScenarioRequest) -> Result<Scenario>;

    /// Start a run of a scenario
    fn start_scenario_run(&self, scenario_id: &str) -> Result<ScenarioRun>;

    /// Mark a scenario run complete
    fn complete_scenario_run(&self, run_id: &str) -> Result<ScenarioRun>;
}
