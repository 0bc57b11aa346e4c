//! Stack registry mapping stack labels to module locators.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ModuleError, ModuleResult};

/// Label of the stack without any modules.
pub const CUSTOM_STACK: &str = "Custom";

/// A catalog of selectable stacks.
///
/// Each label maps to the locators of the stack's modules in order. An empty
/// list is a stack without modules. Labels are kept sorted so the offered
/// choices are the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    stacks: BTreeMap<String, Vec<String>>,
}

impl ModuleRegistry {
    /// Create a registry from an explicit catalog.
    pub fn new(stacks: BTreeMap<String, Vec<String>>) -> Self {
        Self { stacks }
    }

    /// The stacks shipped with zero.
    pub fn builtin() -> Self {
        Self::default()
            .with_stack(
                "EKS + Go + React",
                [
                    "github.com/commitdev/zero-aws-eks-stack",
                    "github.com/commitdev/zero-deployable-backend",
                    "github.com/commitdev/zero-deployable-react-frontend",
                ],
            )
            .with_stack(CUSTOM_STACK, Vec::<String>::new())
    }

    /// Load a catalog from a YAML mapping of label to locator list.
    pub fn load(path: impl AsRef<Path>) -> ModuleResult<Self> {
        let path = path.as_ref();
        debug!("Loading stack registry from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| ModuleError::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let stacks: BTreeMap<String, Vec<String>> =
            serde_yaml::from_str(&content).map_err(|source| ModuleError::RegistryParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(stacks))
    }

    /// Add or replace a stack.
    pub fn with_stack<I, S>(mut self, label: impl Into<String>, locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        debug!("Registering stack: {}", label);
        self.stacks
            .insert(label, locators.into_iter().map(Into::into).collect());
        self
    }

    /// Stack labels in sorted order.
    pub fn available_labels(&self) -> Vec<String> {
        self.stacks.keys().cloned().collect()
    }

    /// Module locators of a stack.
    pub fn lookup(&self, label: &str) -> Option<&[String]> {
        self.stacks.get(label).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_stacks() {
        let registry = ModuleRegistry::builtin();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("EKS + Go + React").map(<[String]>::len),
            Some(3)
        );
        assert_eq!(registry.lookup(CUSTOM_STACK), Some(&[][..]));
    }

    #[test]
    fn test_labels_are_sorted() {
        let registry = ModuleRegistry::default()
            .with_stack("zeta", ["a"])
            .with_stack("Alpha", ["b"])
            .with_stack("beta", Vec::<String>::new());

        assert_eq!(registry.available_labels(), vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_lookup_preserves_locator_order() {
        let registry = ModuleRegistry::default().with_stack("s", ["c", "a", "b"]);
        assert_eq!(
            registry.lookup("s").unwrap(),
            &["c".to_string(), "a".to_string(), "b".to_string()]
        );
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_with_stack_replaces() {
        let registry = ModuleRegistry::default()
            .with_stack("s", ["a"])
            .with_stack("s", ["b"]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("s").unwrap(), &["b".to_string()]);
    }
}
