//! Parameter resolution across prompts and modules.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use zero_config::{ModuleConfig, ParameterMap};
use zero_prompt::{Answer, PromptHandler, PromptResult, UserInput};

/// Folds prompt answers into a single parameter map.
///
/// The map is taken by value and handed back on success. On error it is
/// dropped, so callers never see a partially resolved map.
pub struct ParameterResolver<'a> {
    input: &'a dyn UserInput,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(input: &'a dyn UserInput) -> Self {
        Self { input }
    }

    /// Resolve hand-authored prompts in the given order.
    ///
    /// Skipped prompts leave their field absent.
    pub fn resolve_prompts(
        &self,
        prompts: &[PromptHandler],
        seed: ParameterMap,
    ) -> PromptResult<ParameterMap> {
        warn_forward_references(prompts, &seed);

        let mut params = seed;
        for prompt in prompts {
            if let Answer::Value(value) = prompt.get_param(self.input, &params)? {
                params.insert(prompt.field().to_string(), value);
            }
        }
        Ok(params)
    }

    /// Resolve every parameter of every module.
    ///
    /// Modules are processed sorted by name (ties keep their given order),
    /// parameters in declaration order. When two modules declare the same
    /// field, the module processed later wins.
    pub fn resolve_all(
        &self,
        modules: &[ModuleConfig],
        seed: ParameterMap,
    ) -> PromptResult<ParameterMap> {
        let mut ordered: Vec<&ModuleConfig> = modules.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));

        let mut params = seed;
        for module in ordered {
            info!("Configuring module: {}", module.name);

            for parameter in &module.parameters {
                let handler = PromptHandler::unconditional(parameter.clone());
                let value = handler.get_param(self.input, &params)?.into_value();

                if let Some(previous) = params.insert(parameter.field.clone(), value) {
                    debug!(
                        "Module {} overrides '{}' (was '{}')",
                        module.name, parameter.field, previous
                    );
                }
            }
        }
        Ok(params)
    }
}

fn warn_forward_references(prompts: &[PromptHandler], seed: &ParameterMap) {
    let mut known: HashSet<&str> = seed.keys().map(String::as_str).collect();
    for prompt in prompts {
        if let Some(dependency) = prompt.condition.dependency() {
            if !known.contains(dependency) {
                warn!(
                    "Prompt '{}' depends on '{}' which is not resolved before it",
                    prompt.field(),
                    dependency
                );
            }
        }
        known.insert(prompt.field());
    }
}
