//! Error types for module handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for module operations.
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Errors that can occur while loading stacks or modules.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Module not found: {locator} (looked in {path})")]
    NotFound { locator: String, path: PathBuf },

    #[error("Module {locator} is unreachable: {message}")]
    Unreachable { locator: String, message: String },

    #[error("Failed to read module {locator}: {source}")]
    Read {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest in module {locator}: {source}")]
    InvalidManifest {
        locator: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read stack registry {path}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stack registry {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ModuleError {
    /// Locator of the module that failed, when the error concerns one.
    pub fn locator(&self) -> Option<&str> {
        match self {
            Self::NotFound { locator, .. }
            | Self::Unreachable { locator, .. }
            | Self::Read { locator, .. }
            | Self::InvalidManifest { locator, .. } => Some(locator),
            Self::RegistryRead { .. } | Self::RegistryParse { .. } => None,
        }
    }
}
