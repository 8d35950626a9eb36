//! Checkpoint command

use crate::commands::{connect, Context};
use clap::Args;
use runbox_core::Result;
use runbox_engine::workflows::checkpoint::{checkpoint, CheckpointOptions};

#[derive(Debug, Args)]
pub struct CheckpointArgs {
    /// Snapshot name; derived from the recorded devbox name when omitted
    #[arg(long)]
    pub name: Option<String>,
}

pub fn execute(context: &Context, args: CheckpointArgs) -> Result<()> {
    let (mut answers, client) = connect(context)?;

    let result = checkpoint(&client, &mut answers, &CheckpointOptions { name: args.name })?;

    println!("✓ Snapshot created:");
    println!("  name: {}", result.snapshot_name);
    println!("  id: {}", result.snapshot_id);
    println!("✓ Recorded snapshot-id in {}", answers.path().display());

    Ok(())
}
