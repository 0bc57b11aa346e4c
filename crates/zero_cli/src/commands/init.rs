//! Init command - Interactively create a new project.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use zero_config::{FileCredentialStore, PROJECT_CONFIG_FILE};
use zero_core::{AwsCliIdentity, ProjectConfigBuilder};
use zero_module::{LocalModuleLoader, ModuleRegistry};
use zero_prompt::TerminalInput;

#[derive(Args)]
pub struct InitArgs {
    /// Directory to create the project in
    #[arg(default_value = ".")]
    out_dir: PathBuf,

    /// Directory holding locally available modules
    #[arg(long, env = "ZERO_MODULES_DIR", default_value = "modules")]
    modules_dir: PathBuf,

    /// YAML file listing the stacks to offer instead of the built-in ones
    #[arg(long, env = "ZERO_REGISTRY")]
    registry: Option<PathBuf>,

    /// Credential store file (defaults to ~/.zero/credentials.yml)
    #[arg(long, env = "ZERO_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// Executable used to look up the AWS account
    #[arg(long, env = "ZERO_AWS_CLI", default_value = "aws")]
    aws_cli: String,
}

pub async fn execute(args: InitArgs) -> Result<()> {
    let registry = match &args.registry {
        Some(path) => ModuleRegistry::load(path)?,
        None => ModuleRegistry::builtin(),
    };
    let credentials = match args.credentials {
        Some(path) => FileCredentialStore::new(path),
        None => FileCredentialStore::default_location()?,
    };
    info!("Using credential store {:?}", credentials.path());

    let builder = ProjectConfigBuilder::new(
        Arc::new(TerminalInput::new()),
        registry,
        Arc::new(LocalModuleLoader::new(args.modules_dir)),
        Arc::new(credentials),
        Arc::new(AwsCliIdentity::new().with_program(args.aws_cli)),
    );

    let outcome = builder.init(&args.out_dir).await?;

    if let Some(err) = &outcome.identity_error {
        println!("⚠️  Warning: could not verify the AWS account: {}", err);
        println!("   The project was created without an account id.");
    }

    let config_path = outcome.root_dir.join(PROJECT_CONFIG_FILE);
    outcome
        .config
        .write_to(&config_path)
        .context("Failed to write project config")?;

    println!("✅ Project {} created!", outcome.config.name);
    println!();
    println!("  📁 {}", outcome.root_dir.display());
    println!("  📄 {}", config_path.display());
    println!("  🧱 Stack: {}", outcome.stack);
    for module in &outcome.config.modules {
        println!("     - {}", module);
    }
    if let Some(account_id) = outcome.config.aws_account_id() {
        println!("  ☁️  AWS account: {}", account_id);
    }

    Ok(())
}
