//! Inspect command - Parse a generator config and print it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use zero_config::GeneratorConfig;

#[derive(Args)]
pub struct InspectArgs {
    /// Generator config file
    file: PathBuf,
}

pub async fn execute(args: InspectArgs) -> Result<()> {
    let config = GeneratorConfig::load(&args.file)?;

    println!("Generator Config: {}", args.file.display());
    print!("{}", serde_yaml::to_string(&config)?);

    Ok(())
}
