//! Project initialization.
//!
//! The builder owns the project configuration from creation to return:
//! it asks for the project name, creates the project root, resolves the
//! top-level and module parameters and finally looks up the cloud account.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{debug, info, warn};
use zero_config::{
    AwsCredentials, AwsInfrastructure, CredentialStore, ModuleConfig, ParameterMap,
    UserCredentials, ZeroProjectConfig,
};
use zero_module::{ModuleLoader, ModuleRegistry};
use zero_prompt::{Answer, UserInput};

use crate::error::{InitError, InitResult};
use crate::identity::{IdentityError, IdentityProvider};
use crate::prompts;
use crate::provider::CloudProvider;
use crate::resolver::ParameterResolver;

/// Result of a successful `init`.
#[derive(Debug)]
pub struct InitOutcome {
    pub config: ZeroProjectConfig,
    /// Newly created project directory
    pub root_dir: PathBuf,
    /// Label of the chosen stack
    pub stack: String,
    /// Set when the account lookup failed; the config is still complete
    pub identity_error: Option<IdentityError>,
}

/// Assembles a project configuration through interactive prompts.
pub struct ProjectConfigBuilder {
    input: Arc<dyn UserInput>,
    registry: ModuleRegistry,
    loader: Arc<dyn ModuleLoader>,
    credentials: Arc<dyn CredentialStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl ProjectConfigBuilder {
    pub fn new(
        input: Arc<dyn UserInput>,
        registry: ModuleRegistry,
        loader: Arc<dyn ModuleLoader>,
        credentials: Arc<dyn CredentialStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            input,
            registry,
            loader,
            credentials,
            identity,
        }
    }

    /// Create a new project under `out_dir`.
    pub async fn init(&self, out_dir: &Path) -> InitResult<InitOutcome> {
        let mut config = ZeroProjectConfig::default();
        let input = self.input.as_ref();

        config.name = prompts::project_name()
            .get_param(input, &config.parameters)?
            .into_value();
        validate_project_name(&config.name)?;

        let root_dir = out_dir.join(&config.name);
        info!("🎉 Creating project {}", config.name);
        create_root(out_dir, &root_dir)?;

        let stored = self.credentials.get(&config.name)?;
        let mut credentials = stored.clone();

        config.parameters = self.resolve_top_level(config.parameters, &mut credentials)?;
        let region = self.resolve_infrastructure(&config.parameters, &mut credentials)?;
        config.infrastructure.aws = Some(AwsInfrastructure::new(region));

        if credentials != stored {
            self.credentials.save(&credentials)?;
        }

        let stack = self.choose_stack()?;
        let locators = self
            .registry
            .lookup(&stack)
            .ok_or_else(|| InitError::UnknownStack(stack.clone()))?
            .to_vec();

        let modules = self.load_all_modules(&locators).await?;
        config.parameters =
            ParameterResolver::new(input).resolve_all(&modules, config.parameters)?;
        config.modules = locators;

        let identity_error = match self.fill_provider_details(&mut config, &credentials.aws).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Could not determine the AWS account id: {}", e);
                Some(e)
            }
        };

        Ok(InitOutcome {
            config,
            root_dir,
            stack,
            identity_error,
        })
    }

    /// Push-upstream choice, organization and token.
    ///
    /// The token is recorded only when it is non-empty and differs from the
    /// stored one; it then replaces the stored token.
    fn resolve_top_level(
        &self,
        params: ParameterMap,
        credentials: &mut UserCredentials,
    ) -> InitResult<ParameterMap> {
        let input = self.input.as_ref();
        let mut params =
            ParameterResolver::new(input).resolve_prompts(&prompts::upstream_prompts(), params)?;

        let token = prompts::github_token(&credentials.github.access_token)
            .get_param(input, &params)?;
        if let Answer::Value(token) = token {
            if !token.is_empty() && token != credentials.github.access_token {
                params.insert(prompts::GITHUB_TOKEN.to_string(), token.clone());
                credentials.github.access_token = token;
            }
        }

        Ok(params)
    }

    /// Provider, region and AWS credentials. Returns the region.
    ///
    /// None of these values enter the parameter map. An empty secret answer
    /// keeps the stored secret.
    fn resolve_infrastructure(
        &self,
        params: &ParameterMap,
        credentials: &mut UserCredentials,
    ) -> InitResult<String> {
        let input = self.input.as_ref();

        let choice = input.select(prompts::PROVIDER_LABEL, &CloudProvider::labels())?;
        let provider = CloudProvider::from_label(&choice)
            .filter(CloudProvider::is_supported)
            .ok_or(InitError::UnsupportedProvider(choice))?;

        let region = prompts::aws_region(provider.default_region())
            .get_param(input, params)?
            .into_value();

        let access_key_id = prompts::aws_access_key_id(&credentials.aws.access_key_id)
            .get_param(input, params)?
            .into_value();
        let stored_secret = &credentials.aws.secret_access_key;
        let typed = input.secret(prompts::AWS_SECRET_LABEL, !stored_secret.is_empty())?;
        let secret_access_key = if typed.is_empty() {
            stored_secret.clone()
        } else {
            typed
        };
        credentials.aws = AwsCredentials {
            access_key_id,
            secret_access_key,
        };

        Ok(region)
    }

    fn choose_stack(&self) -> InitResult<String> {
        let labels = self.registry.available_labels();
        Ok(self.input.select(prompts::STACK_LABEL, &labels)?)
    }

    /// Fetch every module of the stack, one after the other.
    ///
    /// The first failure aborts; nothing fetched before it is returned.
    async fn load_all_modules(&self, locators: &[String]) -> InitResult<Vec<ModuleConfig>> {
        let mut modules = Vec::with_capacity(locators.len());
        for locator in locators {
            debug!("Fetching module {}", locator);
            modules.push(self.loader.fetch_module(locator).await?);
        }
        Ok(modules)
    }

    async fn fill_provider_details(
        &self,
        config: &mut ZeroProjectConfig,
        credentials: &AwsCredentials,
    ) -> Result<(), IdentityError> {
        let Some(aws) = config.infrastructure.aws.as_mut() else {
            return Ok(());
        };

        let account_id = self.identity.account_id(credentials, &aws.region).await?;
        info!("Using AWS account {}", account_id);
        aws.account_id = Some(account_id);
        Ok(())
    }
}

fn validate_project_name(name: &str) -> InitResult<()> {
    static NAME: OnceLock<Regex> = OnceLock::new();
    let pattern = NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("project name pattern is valid")
    });

    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(InitError::InvalidProjectName(name.to_string()))
    }
}

fn create_root(out_dir: &Path, root_dir: &Path) -> InitResult<()> {
    fs::create_dir_all(out_dir).map_err(|source| InitError::CreateDirectory {
        path: out_dir.to_path_buf(),
        source,
    })?;

    match fs::create_dir(root_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(InitError::DirectoryExists(root_dir.to_path_buf()))
        }
        Err(source) => Err(InitError::CreateDirectory {
            path: root_dir.to_path_buf(),
            source,
        }),
    }
}
