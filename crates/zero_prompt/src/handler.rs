//! Prompt handler binding a parameter to its condition.

use tracing::debug;
use zero_config::{Parameter, ParameterMap};

use crate::condition::Condition;
use crate::error::PromptResult;
use crate::input::UserInput;

/// Outcome of a single prompt.
///
/// A skipped prompt is distinct from an empty answer: skipped fields are
/// never written to the parameter map, empty answers are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The condition did not hold; the user was not asked.
    Skipped,
    /// The user answered (possibly with an empty string).
    Value(String),
}

impl Answer {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Skipped => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Flatten to a string, mapping a skipped prompt to `""`.
    pub fn into_value(self) -> String {
        match self {
            Self::Skipped => String::new(),
            Self::Value(v) => v,
        }
    }
}

/// One prompt site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptHandler {
    pub parameter: Parameter,
    pub condition: Condition,
}

impl PromptHandler {
    pub fn new(parameter: Parameter, condition: Condition) -> Self {
        Self {
            parameter,
            condition,
        }
    }

    /// Handler that always prompts.
    pub fn unconditional(parameter: Parameter) -> Self {
        Self::new(parameter, Condition::None)
    }

    pub fn field(&self) -> &str {
        &self.parameter.field
    }

    /// Resolve this parameter against the values resolved so far.
    ///
    /// Never touches `input` when the condition is false. An abort from
    /// `input` is returned as is.
    pub fn get_param(&self, input: &dyn UserInput, params: &ParameterMap) -> PromptResult<Answer> {
        if !self.condition.evaluate(params) {
            debug!("Skipping prompt for '{}'", self.parameter.field);
            return Ok(Answer::Skipped);
        }

        let value = input.text(&self.parameter.label, &self.parameter.default)?;
        Ok(Answer::Value(value))
    }
}
