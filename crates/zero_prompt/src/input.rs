//! Interactive input capability.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};

use crate::error::{PromptError, PromptResult};

/// Source of user answers.
///
/// Every operation blocks until the user answers. Cancelling surfaces as
/// [`PromptError::Aborted`].
pub trait UserInput: Send + Sync {
    /// Ask for free text. Empty input yields `default`.
    fn text(&self, label: &str, default: &str) -> PromptResult<String>;

    /// Ask for a secret without echoing it.
    ///
    /// No default is ever displayed. `has_stored` only tells the user that
    /// an empty answer keeps the stored value; the caller applies that rule.
    fn secret(&self, label: &str, has_stored: bool) -> PromptResult<String>;

    /// Ask the user to pick one of `items`; returns the chosen item.
    fn select(&self, label: &str, items: &[String]) -> PromptResult<String>;
}

/// Terminal prompts rendered with dialoguer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl UserInput for TerminalInput {
    fn text(&self, label: &str, default: &str) -> PromptResult<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(label)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| terminal_error(label, e))
    }

    fn secret(&self, label: &str, has_stored: bool) -> PromptResult<String> {
        let theme = ColorfulTheme::default();
        let prompt = if has_stored {
            format!("{} (leave empty to keep the stored value)", label)
        } else {
            label.to_string()
        };
        Password::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| terminal_error(label, e))
    }

    fn select(&self, label: &str, items: &[String]) -> PromptResult<String> {
        if items.is_empty() {
            return Err(PromptError::NoChoices(label.to_string()));
        }

        let theme = ColorfulTheme::default();
        let choice = Select::with_theme(&theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| terminal_error(label, e))?;

        match choice {
            Some(index) => Ok(items[index].clone()),
            None => Err(PromptError::aborted(label)),
        }
    }
}

fn terminal_error(label: &str, err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PromptError::aborted(label)
        }
        other => PromptError::Terminal {
            label: label.to_string(),
            source: other,
        },
    }
}
