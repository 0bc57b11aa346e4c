//! Module schema definitions.
//!
//! A module declares the parameters it needs in a `zero-module.yml` manifest
//! at its root. Only the parameter schema is modelled here; template content
//! belongs to materialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Manifest file names recognised at a module root, in lookup order.
pub const MODULE_MANIFEST_FILES: [&str; 2] = ["zero-module.yml", "zero-module.yaml"];

/// Resolved parameter values keyed by field.
///
/// Ordered so that serialized project files are stable between runs.
pub type ParameterMap = BTreeMap<String, String>;

/// A user-facing configuration field declared by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Key the answer is stored under
    pub field: String,
    /// Prompt text shown to the user
    pub label: String,
    /// Value offered when the user just presses enter
    #[serde(default)]
    pub default: String,
}

impl Parameter {
    pub fn new(
        field: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            default: default.into(),
        }
    }
}

/// The parameter schema contributed by one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl ModuleConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Fields declared by this module, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_manifest() {
        let yaml = r#"
name: zero-deployable-backend
description: Go backend service
parameters:
  - field: productionHost
    label: Production API host
    default: api.example.com
  - field: region
    label: Region
"#;
        let module: ModuleConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(module.name, "zero-deployable-backend");
        assert_eq!(module.description.as_deref(), Some("Go backend service"));
        assert_eq!(module.parameters.len(), 2);
        assert_eq!(module.parameters[0].default, "api.example.com");
        assert_eq!(module.parameters[1].default, "");
        assert_eq!(module.fields().collect::<Vec<_>>(), vec!["productionHost", "region"]);
    }

    #[test]
    fn test_module_without_parameters() {
        let module: ModuleConfig = serde_yaml::from_str("name: empty").unwrap();
        assert!(module.parameters.is_empty());
    }
}
