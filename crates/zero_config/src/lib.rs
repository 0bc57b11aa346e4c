//! # zero_config
//!
//! Configuration documents for zero.
//!
//! This crate owns every serializable shape the project initializer reads or
//! writes:
//!
//! - **Module schemas**: the parameters a module declares (`zero-module.yml`)
//! - **Project configuration**: the resolved result of `zero init`
//! - **Generator configuration**: the document driving materialization
//! - **User credentials**: per-project secrets kept outside the project tree
//!
//! ## Example
//!
//! ```rust,no_run
//! use zero_config::{GeneratorConfig, ZeroProjectConfig};
//!
//! let generator = GeneratorConfig::load("zero.yml").unwrap();
//! println!("{} modules", generator.modules.len());
//!
//! let mut project = ZeroProjectConfig::default();
//! project.name = "my-project".to_string();
//! project.write_to("my-project/zero-project.yml").unwrap();
//! ```

pub mod credentials;
pub mod error;
pub mod generator;
pub mod module;
pub mod project;

pub use credentials::{
    AwsCredentials, CredentialStore, FileCredentialStore, GithubCredentials,
    MemoryCredentialStore, UserCredentials,
};
pub use error::{ConfigError, ConfigResult};
pub use generator::{GeneratorConfig, ModuleInstance};
pub use module::{ModuleConfig, Parameter, ParameterMap, MODULE_MANIFEST_FILES};
pub use project::{AwsInfrastructure, Infrastructure, ZeroProjectConfig, PROJECT_CONFIG_FILE};
