//! Per-project user credentials.
//!
//! Secrets entered during `zero init` are kept outside the generated project,
//! keyed by project name, so that re-running the initializer can offer them
//! as defaults.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// GitHub credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubCredentials {
    #[serde(default)]
    pub access_token: String,
}

/// AWS credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
}

impl AwsCredentials {
    pub fn is_complete(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

/// Credentials stored for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub project_name: String,
    #[serde(default)]
    pub github: GithubCredentials,
    #[serde(default)]
    pub aws: AwsCredentials,
}

impl UserCredentials {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }
}

/// Storage for user credentials.
///
/// `get` never fails for an unknown project; it returns empty credentials
/// carrying the project name.
pub trait CredentialStore: Send + Sync {
    fn get(&self, project_name: &str) -> ConfigResult<UserCredentials>;

    fn save(&self, credentials: &UserCredentials) -> ConfigResult<()>;
}

/// Credential store backed by a YAML file mapping project name to credentials.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.zero/credentials.yml`.
    pub fn default_location() -> ConfigResult<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::new(home.join(".zero").join("credentials.yml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ConfigResult<BTreeMap<String, UserCredentials>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, all: &BTreeMap<String, UserCredentials>) -> ConfigResult<()> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_yaml::to_string(all)?;
        let mut file = open_private(&self.path).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;

        Ok(())
    }
}

/// Open for writing, readable by the owner only from the moment of creation.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies to new files
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, project_name: &str) -> ConfigResult<UserCredentials> {
        let mut all = self.read_all()?;
        Ok(all
            .remove(project_name)
            .unwrap_or_else(|| UserCredentials::new(project_name)))
    }

    fn save(&self, credentials: &UserCredentials) -> ConfigResult<()> {
        let mut all = self.read_all()?;
        all.insert(credentials.project_name.clone(), credentials.clone());
        self.write_all(&all)?;
        info!(
            "Saved credentials for project '{}' to {:?}",
            credentials.project_name, self.path
        );
        Ok(())
    }
}

/// In-memory credential store.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<BTreeMap<String, UserCredentials>>,
    saves: RwLock<usize>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing credentials.
    pub fn with(self, credentials: UserCredentials) -> Self {
        self.entries
            .write()
            .insert(credentials.project_name.clone(), credentials);
        self
    }

    /// Number of `save` calls made so far.
    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, project_name: &str) -> ConfigResult<UserCredentials> {
        Ok(self
            .entries
            .read()
            .get(project_name)
            .cloned()
            .unwrap_or_else(|| UserCredentials::new(project_name)))
    }

    fn save(&self, credentials: &UserCredentials) -> ConfigResult<()> {
        debug!("Storing credentials for '{}' in memory", credentials.project_name);
        self.entries
            .write()
            .insert(credentials.project_name.clone(), credentials.clone());
        *self.saves.write() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_unknown_project() {
        let store = MemoryCredentialStore::new();
        let creds = store.get("acme").unwrap();
        assert_eq!(creds.project_name, "acme");
        assert!(creds.github.access_token.is_empty());
        assert!(!creds.aws.is_complete());
    }

    #[test]
    fn test_memory_store_save_and_get() {
        let store = MemoryCredentialStore::new();
        let mut creds = UserCredentials::new("acme");
        creds.github.access_token = "ghp_123".to_string();
        store.save(&creds).unwrap();

        assert_eq!(store.get("acme").unwrap(), creds);
        assert_eq!(store.save_count(), 1);
    }
}
