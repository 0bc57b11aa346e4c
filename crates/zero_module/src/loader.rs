//! Module schema loading.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use zero_config::{ModuleConfig, MODULE_MANIFEST_FILES};

use crate::error::{ModuleError, ModuleResult};

/// Fetches the parameter schema of a module.
///
/// Any error is fatal for the run that requested the module. Fetching the
/// same locator twice yields equal schemas.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn fetch_module(&self, locator: &str) -> ModuleResult<ModuleConfig>;
}

/// Loader reading modules already present on the local filesystem.
///
/// A locator naming an existing directory is used as is; any other locator
/// is resolved under the modules root, so `github.com/org/module` maps to
/// `<root>/github.com/org/module`.
pub struct LocalModuleLoader {
    modules_root: PathBuf,
}

impl LocalModuleLoader {
    pub fn new(modules_root: impl Into<PathBuf>) -> Self {
        Self {
            modules_root: modules_root.into(),
        }
    }

    /// Directory a locator resolves to.
    pub fn module_dir(&self, locator: &str) -> PathBuf {
        let direct = Path::new(locator);
        if direct.is_dir() {
            direct.to_path_buf()
        } else {
            self.modules_root.join(locator)
        }
    }

    fn manifest_path(&self, module_dir: &Path) -> Option<PathBuf> {
        MODULE_MANIFEST_FILES
            .iter()
            .map(|name| module_dir.join(name))
            .find(|path| path.is_file())
    }
}

#[async_trait]
impl ModuleLoader for LocalModuleLoader {
    async fn fetch_module(&self, locator: &str) -> ModuleResult<ModuleConfig> {
        let module_dir = self.module_dir(locator);
        let manifest_path =
            self.manifest_path(&module_dir)
                .ok_or_else(|| ModuleError::NotFound {
                    locator: locator.to_string(),
                    path: module_dir.clone(),
                })?;

        debug!("Loading module manifest from {:?}", manifest_path);
        let content = tokio::fs::read_to_string(&manifest_path)
            .await
            .map_err(|source| ModuleError::Read {
                locator: locator.to_string(),
                source,
            })?;
        let module: ModuleConfig =
            serde_yaml::from_str(&content).map_err(|source| ModuleError::InvalidManifest {
                locator: locator.to_string(),
                source,
            })?;

        info!(
            "Loaded module: {} ({} parameter(s))",
            module.name,
            module.parameters.len()
        );
        Ok(module)
    }
}
