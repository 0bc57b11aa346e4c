//! Generator configuration document.
//!
//! Describes which modules to materialize into which output directories and
//! with which parameters. Parsing it is the only part handled here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// One module to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInstance {
    /// Module locator
    pub source: String,
    /// Output directory relative to the project root
    #[serde(default)]
    pub output: String,
    /// Replace existing files in `output`
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

/// Top-level generator document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub name: String,
    #[serde(default)]
    pub context: HashMap<String, String>,
    #[serde(default)]
    pub modules: Vec<ModuleInstance>,
}

impl GeneratorConfig {
    /// Load and parse a generator config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading generator config from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GeneratorConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "Loaded generator config '{}' with {} module(s)",
            config.name,
            config.modules.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_document() {
        let yaml = r#"
name: acme
context:
  region: us-west-2
modules:
  - source: github.com/commitdev/zero-aws-eks-stack
    output: infrastructure
    overwrite: true
    params:
      clusterName: acme-staging
  - source: github.com/commitdev/zero-deployable-backend
    output: backend
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.name, "acme");
        assert_eq!(config.context.get("region").map(String::as_str), Some("us-west-2"));
        assert_eq!(config.modules.len(), 2);
        assert!(config.modules[0].overwrite);
        assert_eq!(
            config.modules[0].params.get("clusterName").map(String::as_str),
            Some("acme-staging")
        );
        assert!(!config.modules[1].overwrite);
        assert!(config.modules[1].params.is_empty());
    }
}
