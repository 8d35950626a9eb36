//! Scenario command

use crate::commands::{connect, Context};
use clap::Args;
use runbox_core::{Result, RunboxError};
use runbox_engine::workflows::scenario::{scenario, ScenarioOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Name of the scored check
    #[arg(long, default_value = "resources-checker-scenario")]
    pub name: String,

    /// Human-readable description
    #[arg(long)]
    pub description: Option<String>,

    /// Local file holding the scorer payload, forwarded verbatim
    #[arg(long, default_value = "scorer.py")]
    pub scorer_file: PathBuf,

    /// Local directory re-uploaded for the run
    #[arg(long, default_value = "resources")]
    pub resources: PathBuf,

    /// Remote prefix the resources land under
    #[arg(long, default_value = "/workspace/resources")]
    pub remote_prefix: String,

    /// File (relative to the prefix) overwritten with the recorded identity
    #[arg(long, default_value = "me.txt")]
    pub contact_file: String,

    /// Interpreter run against the uploaded script
    #[arg(long, default_value = "python3")]
    pub interpreter: String,

    /// Script (relative to the prefix) to execute
    #[arg(long, default_value = "test.py")]
    pub script: String,
}

pub fn execute(context: &Context, args: ScenarioArgs) -> Result<()> {
    let (mut answers, client) = connect(context)?;

    // The scorer is opaque; it is read as text and never interpreted locally
    let scorer = fs::read_to_string(&args.scorer_file)
        .map_err(|e| RunboxError::from_io("read_scorer_file", e))?;

    let options = ScenarioOptions {
        name: args.name,
        description: args.description,
        scorer,
        resources_dir: args.resources,
        remote_prefix: args.remote_prefix,
        contact_file: args.contact_file,
        interpreter: args.interpreter,
        script: args.script,
    };

    let result = scenario(&client, &mut answers, &options)?;

    println!("✓ Scenario created: {}", result.scenario_id);
    println!("✓ Scenario run started: {}", result.run_id);
    println!("✓ Verification script finished with exit code {}", result.exit_code);
    if result.completed {
        println!("✓ Scenario run marked complete");
    }
    println!("✓ Recorded ext-scenario-run-id in {}", answers.path().display());

    Ok(())
}
