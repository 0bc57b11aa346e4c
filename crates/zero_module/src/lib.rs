//! # zero_module
//!
//! Module stacks and module schema loading for zero.
//!
//! - **Registry**: maps a stack label to the ordered locators of its modules
//! - **Loader**: turns a locator into the module's parameter schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use zero_module::{LocalModuleLoader, ModuleLoader, ModuleRegistry};
//!
//! # async fn run() -> zero_module::ModuleResult<()> {
//! let registry = ModuleRegistry::builtin();
//! let loader = LocalModuleLoader::new("modules");
//!
//! for locator in registry.lookup("EKS + Go + React").unwrap_or_default() {
//!     let module = loader.fetch_module(locator).await?;
//!     println!("{}: {} parameter(s)", module.name, module.parameters.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod mock;
pub mod registry;

pub use error::{ModuleError, ModuleResult};
pub use loader::{LocalModuleLoader, ModuleLoader};
pub use mock::MockModuleLoader;
pub use registry::{ModuleRegistry, CUSTOM_STACK};
