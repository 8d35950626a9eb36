//! Blueprint command

use crate::commands::{connect, Context};
use clap::Args;
use runbox_core::Result;
use runbox_engine::workflows::blueprint::{blueprint, BlueprintOptions};

#[derive(Debug, Args)]
pub struct BlueprintArgs {
    /// Name of the image definition
    #[arg(long, default_value = "cowsay-blueprint")]
    pub name: String,

    /// Human-readable description
    #[arg(long)]
    pub description: Option<String>,

    /// Provisioning command baked into the image; repeatable, order kept
    #[arg(long = "setup-command")]
    pub setup_commands: Vec<String>,

    /// Name for the devbox booted to verify the image
    #[arg(long, default_value = "cowsay-test-devbox")]
    pub devbox_name: String,

    /// Command proving the provisioning took effect
    #[arg(long, default_value = "cowsay 'Hello from runbox!'")]
    pub verify_command: String,
}

pub fn execute(context: &Context, args: BlueprintArgs) -> Result<()> {
    let (mut answers, client) = connect(context)?;

    let defaults = BlueprintOptions::default();
    let options = BlueprintOptions {
        name: args.name,
        description: args.description.or(defaults.description),
        setup_commands: if args.setup_commands.is_empty() {
            defaults.setup_commands
        } else {
            args.setup_commands
        },
        devbox_name: args.devbox_name,
        verify_command: args.verify_command,
    };

    let result = blueprint(&client, &mut answers, &options)?;

    println!("✓ Blueprint created:");
    println!("  name: {}", result.blueprint_name);
    println!("  id: {}", result.blueprint_id);
    println!("✓ Devbox booted from blueprint: {}", result.devbox_id);
    println!("✓ Verification finished with exit code {}", result.exit_code);
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
        if !result.stdout.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
