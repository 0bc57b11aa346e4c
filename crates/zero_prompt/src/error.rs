//! Error types for prompting.

use thiserror::Error;

/// Result type alias for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors that can occur while asking the user for a value.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt '{label}' was aborted")]
    Aborted { label: String },

    #[error("Prompt '{label}' failed: {source}")]
    Terminal {
        label: String,
        #[source]
        source: dialoguer::Error,
    },

    #[error("Nothing to choose from for '{0}'")]
    NoChoices(String),

    #[error("'{choice}' is not a valid choice for '{label}'")]
    InvalidChoice { label: String, choice: String },
}

impl PromptError {
    pub fn aborted(label: impl Into<String>) -> Self {
        Self::Aborted {
            label: label.into(),
        }
    }
}
