//! Error types for project initialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for initialization.
pub type InitResult<T> = Result<T, InitError>;

/// Hard failures of `init`. Each one aborts the whole run.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Invalid project name '{0}': use letters, digits, '.', '-' or '_', starting with a letter or digit")]
    InvalidProjectName(String),

    #[error("Directory {0} already exists")]
    DirectoryExists(PathBuf),

    #[error("Failed to create project directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Exiting prompt: {0}")]
    Prompt(#[from] zero_prompt::PromptError),

    #[error("Only the AWS provider is available at this time, got '{0}'")]
    UnsupportedProvider(String),

    #[error("Unknown stack: {0}")]
    UnknownStack(String),

    #[error("Unable to load module: {0}")]
    ModuleFetch(#[from] zero_module::ModuleError),

    #[error("Credential store error: {0}")]
    Credentials(#[from] zero_config::ConfigError),
}
