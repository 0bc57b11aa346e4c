//! # zero_core
//!
//! Parameter resolution and project initialization for zero.
//!
//! # Architecture
//!
//! - **Prompts**: hand-authored top-level prompts and their conditions
//! - **Resolver**: folds prompt answers of all modules into one parameter map
//! - **Builder**: drives `init` from project name to finished configuration
//! - **Identity**: looks up the cloud account behind the entered credentials
//!
//! Every collaborator that talks to the outside world (terminal, module
//! source, credential store, cloud identity) is injected into the builder.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use zero_config::FileCredentialStore;
//! use zero_core::{AwsCliIdentity, ProjectConfigBuilder};
//! use zero_module::{LocalModuleLoader, ModuleRegistry};
//! use zero_prompt::TerminalInput;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let builder = ProjectConfigBuilder::new(
//!     Arc::new(TerminalInput::new()),
//!     ModuleRegistry::builtin(),
//!     Arc::new(LocalModuleLoader::new("modules")),
//!     Arc::new(FileCredentialStore::default_location()?),
//!     Arc::new(AwsCliIdentity::new()),
//! );
//! let outcome = builder.init(Path::new(".")).await?;
//! println!("{:?}", outcome.config);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod identity;
pub mod prompts;
pub mod provider;
pub mod resolver;

pub use builder::{InitOutcome, ProjectConfigBuilder};
pub use error::{InitError, InitResult};
pub use identity::{AwsCliIdentity, IdentityError, IdentityProvider, IdentityResult};
pub use provider::CloudProvider;
pub use resolver::ParameterResolver;
