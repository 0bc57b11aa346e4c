//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod init;
pub mod inspect;

/// zero - scaffold cloud infrastructure projects from composable modules
#[derive(Parser)]
#[command(name = "zero")]
#[command(version, about = "zero - scaffold cloud infrastructure projects from composable modules")]
#[command(long_about = r#"
zero creates a new project by asking for a project name, GitHub and AWS
details, then the parameters of every module in the chosen stack.

COMMANDS:
  init     → Interactively create a project and write zero-project.yml
  inspect  → Parse a generator config and print it

EXIT CODES:
  0 - Success
  1 - General error
  2 - Config parse error
  3 - Project directory already exists
  4 - Module fetch error
  5 - Prompt aborted
  6 - Unsupported cloud provider
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "ZERO_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project
    Init(init::InitArgs),

    /// Parse and print a generator config
    Inspect(inspect::InspectArgs),
}
