//! Hand-authored top-level prompts.
//!
//! Conditions here only reference top-level fields asked before them, never
//! module fields.

use zero_config::Parameter;
use zero_prompt::{Condition, PromptHandler};

pub const PROJECT_NAME: &str = "projectName";
pub const SHOULD_PUSH_UPSTREAM: &str = "ShouldPushRepoUpstream";
pub const GITHUB_ROOT_ORG: &str = "GithubRootOrg";
pub const GITHUB_TOKEN: &str = "githubPersonalToken";

pub const AWS_REGION: &str = "awsRegion";
pub const AWS_ACCESS_KEY_ID: &str = "awsAccessKeyId";

/// Masked; the stored secret is never shown.
pub const AWS_SECRET_LABEL: &str = "AWS Secret Access Key";

pub const PROVIDER_LABEL: &str = "Select Cloud Provider";
pub const STACK_LABEL: &str = "Pick a stack you'd like to use";

/// Asked on its own, first: the other prompts derive defaults from it.
pub fn project_name() -> PromptHandler {
    PromptHandler::unconditional(Parameter::new(PROJECT_NAME, "Project Name", ""))
}

/// Push-upstream choice and GitHub organization, in asking order.
pub fn upstream_prompts() -> Vec<PromptHandler> {
    vec![
        PromptHandler::unconditional(Parameter::new(
            SHOULD_PUSH_UPSTREAM,
            "Should the created projects be checked into github automatically? (y/n)",
            "y",
        )),
        PromptHandler::new(
            Parameter::new(
                GITHUB_ROOT_ORG,
                "What's the root of the github org to create repositories in?",
                "github.com/",
            ),
            Condition::key_match(SHOULD_PUSH_UPSTREAM, "y"),
        ),
    ]
}

/// Token prompt offering the stored token as default.
pub fn github_token(stored_token: &str) -> PromptHandler {
    PromptHandler::new(
        Parameter::new(
            GITHUB_TOKEN,
            "Github Personal Access Token with access to the above organization",
            stored_token,
        ),
        Condition::key_match(SHOULD_PUSH_UPSTREAM, "y"),
    )
}

pub fn aws_region(default_region: &str) -> PromptHandler {
    PromptHandler::unconditional(Parameter::new(AWS_REGION, "AWS Region", default_region))
}

pub fn aws_access_key_id(stored: &str) -> PromptHandler {
    PromptHandler::unconditional(Parameter::new(AWS_ACCESS_KEY_ID, "AWS Access Key ID", stored))
}
