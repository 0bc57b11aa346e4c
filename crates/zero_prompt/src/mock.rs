//! Scripted input for testing.
//!
//! Replays a fixed sequence of answers instead of reading the terminal and
//! records every prompt it was asked, so tests can verify which prompts
//! fired and in which order.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{PromptError, PromptResult};
use crate::input::UserInput;

/// A scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Type this text, or pick this item in a selection.
    Answer(String),
    /// Press enter on the offered default.
    Default,
    /// Cancel the prompt.
    Abort,
}

/// A prompt that was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub label: String,
    /// Default for text prompts, empty for selections and secrets
    pub default: String,
    /// Offered items for selections, empty for text prompts
    pub items: Vec<String>,
    /// Asked through [`UserInput::secret`]
    pub masked: bool,
}

/// Input source replaying scripted responses.
///
/// Running out of responses behaves like the user aborting.
#[derive(Clone, Default)]
pub struct ScriptedInput {
    responses: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    asked: Arc<Mutex<Vec<AskedPrompt>>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed answer or a selection.
    pub fn answer(self, value: impl Into<String>) -> Self {
        self.responses
            .lock()
            .push_back(ScriptedResponse::Answer(value.into()));
        self
    }

    /// Queue accepting the default.
    pub fn accept_default(self) -> Self {
        self.responses.lock().push_back(ScriptedResponse::Default);
        self
    }

    /// Queue a cancellation.
    pub fn abort(self) -> Self {
        self.responses.lock().push_back(ScriptedResponse::Abort);
        self
    }

    /// Every prompt asked so far, in order.
    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.lock().clone()
    }

    /// Labels of every prompt asked so far, in order.
    pub fn asked_labels(&self) -> Vec<String> {
        self.asked.lock().iter().map(|p| p.label.clone()).collect()
    }

    /// Number of scripted responses not consumed yet.
    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }

    fn next(&self, prompt: AskedPrompt) -> ScriptedResponse {
        self.asked.lock().push(prompt);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(ScriptedResponse::Abort)
    }
}

impl UserInput for ScriptedInput {
    fn text(&self, label: &str, default: &str) -> PromptResult<String> {
        let response = self.next(AskedPrompt {
            label: label.to_string(),
            default: default.to_string(),
            items: Vec::new(),
            masked: false,
        });

        match response {
            ScriptedResponse::Answer(value) => Ok(value),
            ScriptedResponse::Default => Ok(default.to_string()),
            ScriptedResponse::Abort => Err(PromptError::aborted(label)),
        }
    }

    /// Accepting the default types nothing.
    fn secret(&self, label: &str, _has_stored: bool) -> PromptResult<String> {
        let response = self.next(AskedPrompt {
            label: label.to_string(),
            default: String::new(),
            items: Vec::new(),
            masked: true,
        });

        match response {
            ScriptedResponse::Answer(value) => Ok(value),
            ScriptedResponse::Default => Ok(String::new()),
            ScriptedResponse::Abort => Err(PromptError::aborted(label)),
        }
    }

    fn select(&self, label: &str, items: &[String]) -> PromptResult<String> {
        if items.is_empty() {
            return Err(PromptError::NoChoices(label.to_string()));
        }

        let response = self.next(AskedPrompt {
            label: label.to_string(),
            default: String::new(),
            items: items.to_vec(),
            masked: false,
        });

        match response {
            ScriptedResponse::Answer(choice) if items.contains(&choice) => Ok(choice),
            ScriptedResponse::Answer(choice) => Err(PromptError::InvalidChoice {
                label: label.to_string(),
                choice,
            }),
            ScriptedResponse::Default => Ok(items[0].clone()),
            ScriptedResponse::Abort => Err(PromptError::aborted(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_text() {
        let input = ScriptedInput::new().answer("acme").accept_default();

        assert_eq!(input.text("Project Name", "").unwrap(), "acme");
        assert_eq!(input.text("Region", "us-east-1").unwrap(), "us-east-1");
        assert_eq!(input.asked_labels(), vec!["Project Name", "Region"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_aborts() {
        let input = ScriptedInput::new();
        let err = input.text("Project Name", "").unwrap_err();
        assert!(matches!(err, PromptError::Aborted { .. }));
    }

    #[test]
    fn test_scripted_secret() {
        let input = ScriptedInput::new().answer("s3cr3t").accept_default();

        assert_eq!(input.secret("Secret", false).unwrap(), "s3cr3t");
        assert_eq!(input.secret("Secret", true).unwrap(), "");
        assert!(input.asked().iter().all(|p| p.masked && p.default.is_empty()));
    }

    #[test]
    fn test_scripted_select() {
        let items = vec!["Custom".to_string(), "EKS + Go + React".to_string()];
        let input = ScriptedInput::new().answer("EKS + Go + React").answer("Nope");

        assert_eq!(input.select("Stack", &items).unwrap(), "EKS + Go + React");
        assert!(matches!(
            input.select("Stack", &items),
            Err(PromptError::InvalidChoice { .. })
        ));
        assert_eq!(input.asked()[0].items, items);
    }
}
