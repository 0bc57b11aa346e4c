//! In-memory module loader for testing.
//!
//! Serves predefined schemas, records every fetch and can be told to fail
//! on chosen locators, so orchestration can be tested without modules on
//! disk.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use zero_config::ModuleConfig;

use crate::error::{ModuleError, ModuleResult};
use crate::loader::ModuleLoader;

/// Mock module loader.
#[derive(Clone, Default)]
pub struct MockModuleLoader {
    modules: Arc<RwLock<HashMap<String, ModuleConfig>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    fetched: Arc<RwLock<Vec<String>>>,
}

impl MockModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `module` for `locator`.
    pub fn with_module(self, locator: impl Into<String>, module: ModuleConfig) -> Self {
        self.modules.write().insert(locator.into(), module);
        self
    }

    /// Make fetches of `locator` fail as unreachable.
    pub fn failing_on(self, locator: impl Into<String>) -> Self {
        self.failing.write().insert(locator.into());
        self
    }

    /// Locators fetched so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.read().clone()
    }
}

#[async_trait]
impl ModuleLoader for MockModuleLoader {
    async fn fetch_module(&self, locator: &str) -> ModuleResult<ModuleConfig> {
        self.fetched.write().push(locator.to_string());

        if self.failing.read().contains(locator) {
            return Err(ModuleError::Unreachable {
                locator: locator.to_string(),
                message: "mock failure".to_string(),
            });
        }

        self.modules
            .read()
            .get(locator)
            .cloned()
            .ok_or_else(|| ModuleError::Unreachable {
                locator: locator.to_string(),
                message: "no such module".to_string(),
            })
    }
}
