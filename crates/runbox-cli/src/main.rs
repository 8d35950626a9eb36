//! runbox CLI
//!
//! One subcommand per assessment workflow against the remote devbox service.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "runbox")]
#[command(about = "Drive a remote devbox service through its workflows", long_about = None)]
struct Cli {
    /// Path of the shared answers document
    #[arg(long, global = true, default_value = "answers.json")]
    answers: PathBuf,

    /// Base URL of the devbox service
    #[arg(long, global = true, default_value = runbox_client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Raise the log filter to debug
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a devbox and record its identity
    Provision(commands::provision::ProvisionArgs),
    /// Upload resources, edit the contact file, run the test script
    Operate(commands::operate::OperateArgs),
    /// Snapshot the recorded devbox
    Checkpoint(commands::checkpoint::CheckpointArgs),
    /// Create a blueprint, boot from it, verify the provisioning
    Blueprint(commands::blueprint::BlueprintArgs),
    /// Define a scored scenario and exercise the recorded devbox
    Scenario(commands::scenario::ScenarioArgs),
}

fn main() {
    let cli = Cli::parse();
    runbox_core::logging::init(cli.verbose);

    let context = commands::Context {
        answers: cli.answers,
        base_url: cli.base_url,
    };

    let result = match cli.command {
        Commands::Provision(args) => commands::provision::execute(&context, args),
        Commands::Operate(args) => commands::operate::execute(&context, args),
        Commands::Checkpoint(args) => commands::checkpoint::execute(&context, args),
        Commands::Blueprint(args) => commands::blueprint::execute(&context, args),
        Commands::Scenario(args) => commands::scenario::execute(&context, args),
    };

    if let Err(e) = result {
        eprintln!("Error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}
