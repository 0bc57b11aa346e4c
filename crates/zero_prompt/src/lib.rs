//! # zero_prompt
//!
//! Conditional parameter prompts for zero.
//!
//! A [`PromptHandler`] binds one [`Parameter`](zero_config::Parameter) to a
//! [`Condition`]. When the condition holds against the values resolved so
//! far, the handler asks the user through a [`UserInput`]; otherwise the
//! field is skipped without any interaction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use zero_config::{Parameter, ParameterMap};
//! use zero_prompt::{Condition, PromptHandler, TerminalInput};
//!
//! let mut params = ParameterMap::new();
//! params.insert("ShouldPushRepoUpstream".into(), "y".into());
//!
//! let handler = PromptHandler::new(
//!     Parameter::new("GithubRootOrg", "Github org", "github.com/"),
//!     Condition::key_match("ShouldPushRepoUpstream", "y"),
//! );
//! let answer = handler.get_param(&TerminalInput::new(), &params).unwrap();
//! ```

pub mod condition;
pub mod error;
pub mod handler;
pub mod input;
pub mod mock;

pub use condition::Condition;
pub use error::{PromptError, PromptResult};
pub use handler::{Answer, PromptHandler};
pub use input::{TerminalInput, UserInput};
pub use mock::{AskedPrompt, ScriptedInput, ScriptedResponse};
