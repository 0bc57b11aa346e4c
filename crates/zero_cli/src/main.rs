//! zero CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Config parse error
//! - 3: Project directory already exists
//! - 4: Module fetch error
//! - 5: Prompt aborted
//! - 6: Unsupported cloud provider

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zero_config::ConfigError;
use zero_core::InitError;
use zero_module::ModuleError;
use zero_prompt::PromptError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const CONFIG_PARSE: u8 = 2;
    pub const DIRECTORY_EXISTS: u8 = 3;
    pub const MODULE_FETCH: u8 = 4;
    pub const PROMPT_ABORTED: u8 = 5;
    pub const UNSUPPORTED_PROVIDER: u8 = 6;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args).await,
        Commands::Inspect(args) => commands::inspect::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,zero={level},zero_cli={level},zero_core={level},zero_module={level},zero_config={level},zero_prompt={level}"
        ))
    });

    let log_result = tracing_subscriber::registry()
        .with(filter)
        .with(cli.log_json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with(
            (!cli.log_json).then(|| fmt::layer().with_target(false).with_writer(std::io::stderr)),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<InitError>() {
        return match err {
            InitError::DirectoryExists(_) => ExitCodes::DIRECTORY_EXISTS,
            InitError::ModuleFetch(_) => ExitCodes::MODULE_FETCH,
            InitError::Prompt(PromptError::Aborted { .. }) => ExitCodes::PROMPT_ABORTED,
            InitError::UnsupportedProvider(_) => ExitCodes::UNSUPPORTED_PROVIDER,
            InitError::Credentials(ConfigError::Parse { .. }) => ExitCodes::CONFIG_PARSE,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }

    if let Some(err) = e.downcast_ref::<ModuleError>() {
        return match err {
            ModuleError::RegistryRead { .. } | ModuleError::RegistryParse { .. } => {
                ExitCodes::CONFIG_PARSE
            }
            _ => ExitCodes::MODULE_FETCH,
        };
    }

    match e.downcast_ref::<ConfigError>() {
        Some(ConfigError::Read { .. } | ConfigError::Parse { .. }) => ExitCodes::CONFIG_PARSE,
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_categorize_init_errors() {
        let cases = [
            (
                InitError::DirectoryExists(PathBuf::from("acme")),
                ExitCodes::DIRECTORY_EXISTS,
            ),
            (
                InitError::ModuleFetch(ModuleError::Unreachable {
                    locator: "m".to_string(),
                    message: "down".to_string(),
                }),
                ExitCodes::MODULE_FETCH,
            ),
            (
                InitError::Prompt(PromptError::aborted("Project Name")),
                ExitCodes::PROMPT_ABORTED,
            ),
            (
                InitError::Prompt(PromptError::NoChoices("Select Cloud Provider".to_string())),
                ExitCodes::GENERAL_ERROR,
            ),
            (
                InitError::Prompt(PromptError::Terminal {
                    label: "Project Name".to_string(),
                    source: dialoguer::Error::IO(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "not a terminal",
                    )),
                }),
                ExitCodes::GENERAL_ERROR,
            ),
            (
                InitError::UnsupportedProvider("Google GCP".to_string()),
                ExitCodes::UNSUPPORTED_PROVIDER,
            ),
            (
                InitError::InvalidProjectName("../x".to_string()),
                ExitCodes::GENERAL_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(categorize_error(&anyhow::Error::new(err)), expected);
        }
    }

    #[test]
    fn test_categorize_config_errors() {
        let parse = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = anyhow::Error::new(ConfigError::Parse {
            path: PathBuf::from("zero.yml"),
            source: parse,
        });
        assert_eq!(categorize_error(&err), ExitCodes::CONFIG_PARSE);

        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }

    #[test]
    fn test_categorize_through_context() {
        let err = anyhow::Error::new(InitError::DirectoryExists(PathBuf::from("acme")))
            .context("Failed to create project");
        assert_eq!(categorize_error(&err), ExitCodes::DIRECTORY_EXISTS);
    }
}
