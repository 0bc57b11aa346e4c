//! Project configuration produced by `zero init`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::module::ParameterMap;

/// File name the resolved project configuration is written to.
pub const PROJECT_CONFIG_FILE: &str = "zero-project.yml";

/// AWS details of the target infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsInfrastructure {
    pub region: String,
    /// Filled by the identity lookup; left unset when it fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl AwsInfrastructure {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            account_id: None,
        }
    }
}

/// Cloud infrastructure block. Only AWS is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsInfrastructure>,
}

/// The resolved configuration of a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroProjectConfig {
    pub name: String,
    #[serde(default)]
    pub infrastructure: Infrastructure,
    #[serde(default)]
    pub parameters: ParameterMap,
    /// Locators of the modules making up the project, in stack order
    #[serde(default)]
    pub modules: Vec<String>,
}

impl ZeroProjectConfig {
    /// Load a project configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading project config from {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the configuration as YAML.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote project config to {:?}", path);
        Ok(())
    }

    /// Account id resolved for the AWS infrastructure, if any.
    pub fn aws_account_id(&self) -> Option<&str> {
        self.infrastructure
            .aws
            .as_ref()
            .and_then(|aws| aws.account_id.as_deref())
    }
}
