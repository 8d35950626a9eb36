//! Provision command

use crate::commands::{connect, Context};
use clap::Args;
use runbox_core::{keys, Result};
use runbox_engine::workflows::provision::{provision, ProvisionOptions};

#[derive(Debug, Args)]
pub struct ProvisionArgs {
    /// Name to provision the devbox under; defaults to the recorded
    /// devbox-name
    #[arg(long)]
    pub name: Option<String>,
}

pub fn execute(context: &Context, args: ProvisionArgs) -> Result<()> {
    let (mut answers, client) = connect(context)?;

    let name = match args.name {
        Some(name) => name,
        None => answers.require(keys::DEVBOX_NAME)?.to_string(),
    };

    let result = provision(&client, &mut answers, &ProvisionOptions { name })?;

    println!("✓ Devbox provisioned:");
    println!("  name: {}", result.devbox_name);
    println!("  id: {}", result.devbox_id);
    println!("  status: {}", result.status);
    println!("✓ Recorded devbox-name and devbox-id in {}", answers.path().display());

    Ok(())
}
