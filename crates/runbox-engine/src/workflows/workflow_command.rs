//! Workflow dispatch
//!
//! The CLI goes through this single entry point; each command variant maps
//! onto exactly one driver.

use crate::workflows::blueprint::{blueprint, BlueprintOptions, BlueprintResult};
use crate::workflows::checkpoint::{checkpoint, CheckpointOptions, CheckpointResult};
use crate::workflows::operate::{operate, OperateOptions, OperateResult};
use crate::workflows::provision::{provision, ProvisionOptions, ProvisionResult};
use crate::workflows::scenario::{scenario, ScenarioOptions, ScenarioResult};
use runbox_client::DevboxApi;
use runbox_core::Result;
use runbox_store::AnswersStore;

/// One variant per workflow
#[derive(Debug, Clone)]
pub enum WorkflowCommand {
    Provision(ProvisionOptions),
    Operate(OperateOptions),
    Checkpoint(CheckpointOptions),
    Blueprint(BlueprintOptions),
    Scenario(ScenarioOptions),
}

/// Typed result of a completed workflow
#[derive(Debug, Clone)]
pub enum WorkflowReport {
    Provision(ProvisionResult),
    Operate(OperateResult),
    Checkpoint(CheckpointResult),
    Blueprint(BlueprintResult),
    Scenario(ScenarioResult),
}

/// Apply a workflow command against the remote service
pub fn apply_workflow_command(
    cmd: WorkflowCommand,
    client: &dyn DevboxApi,
    answers: &mut AnswersStore,
) -> Result<WorkflowReport> {
    match cmd {
        WorkflowCommand::Provision(options) => {
            provision(client, answers, &options).map(WorkflowReport::Provision)
        }
        WorkflowCommand::Operate(options) => {
            operate(client, answers, &options).map(WorkflowReport::Operate)
        }
        WorkflowCommand::Checkpoint(options) => {
            checkpoint(client, answers, &options).map(WorkflowReport::Checkpoint)
        }
        WorkflowCommand::Blueprint(options) => {
            blueprint(client, answers, &options).map(WorkflowReport::Blueprint)
        }
        WorkflowCommand::Scenario(options) => {
            scenario(client, answers, &options).map(WorkflowReport::Scenario)
        }
    }
}
