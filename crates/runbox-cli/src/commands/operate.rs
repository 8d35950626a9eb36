//! Operate command

use crate::commands::{connect, Context};
use clap::Args;
use runbox_core::Result;
use runbox_engine::workflows::operate::{operate, OperateOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OperateArgs {
    /// Local directory uploaded into the devbox
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

pub fn execute(context: &Context, args: OperateArgs) -> Result<()> {
    let (mut answers, client) = connect(context)?;

    let options = OperateOptions {
        resources_dir: args.resources,
        remote_prefix: args.remote_prefix,
        contact_file: args.contact_file,
        interpreter: args.interpreter,
        script: args.script,
    };

    let result = operate(&client, &mut answers, &options)?;

    println!("✓ Uploaded {} resource file(s) to devbox {}", result.uploaded.len(), result.devbox_id);
    println!("✓ Script finished with exit code {}", result.exit_code);
    if !result.stdout.is_empty() {
        println!("--- stdout ---");
        print!("{}", result.stdout);
        if !result.stdout.ends_with('\n') {
            println!();
        }
    }
    if !result.stderr.is_empty() {
        println!("--- stderr ---");
        print!("{}", result.stderr);
        if !result.stderr.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
