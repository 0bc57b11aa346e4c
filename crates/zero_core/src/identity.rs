//! Cloud account identity lookup.
//!
//! Used after parameter resolution to record which AWS account the project
//! targets. Failures here are reported but never abort initialization.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use zero_config::AwsCredentials;

/// Result type alias for identity lookups.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors from the identity lookup.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("AWS credentials are incomplete")]
    MissingCredentials,

    #[error("Failed to run {program}: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Identity lookup rejected: {0}")]
    Rejected(String),

    #[error("Invalid identity response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Resolves the account owning a set of credentials.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn account_id(&self, credentials: &AwsCredentials, region: &str)
        -> IdentityResult<String>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CallerIdentity {
    account: String,
}

/// Identity lookup through `aws sts get-caller-identity`.
pub struct AwsCliIdentity {
    program: String,
}

impl AwsCliIdentity {
    pub fn new() -> Self {
        Self {
            program: "aws".to_string(),
        }
    }

    /// Use a different executable than `aws` from `PATH`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for AwsCliIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for AwsCliIdentity {
    async fn account_id(
        &self,
        credentials: &AwsCredentials,
        region: &str,
    ) -> IdentityResult<String> {
        if !credentials.is_complete() {
            return Err(IdentityError::MissingCredentials);
        }

        debug!("Running {} sts get-caller-identity in {}", self.program, region);
        let output = tokio::process::Command::new(&self.program)
            .args(["sts", "get-caller-identity", "--output", "json"])
            .env("AWS_ACCESS_KEY_ID", &credentials.access_key_id)
            .env("AWS_SECRET_ACCESS_KEY", &credentials.secret_access_key)
            .env("AWS_REGION", region)
            .env("AWS_DEFAULT_REGION", region)
            .env_remove("AWS_SESSION_TOKEN")
            .env_remove("AWS_PROFILE")
            .output()
            .await
            .map_err(|source| IdentityError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IdentityError::Rejected(stderr.trim().to_string()));
        }

        parse_caller_identity(&output.stdout)
    }
}

/// Extract the account id from `get-caller-identity` JSON output.
pub fn parse_caller_identity(stdout: &[u8]) -> IdentityResult<String> {
    let caller: CallerIdentity = serde_json::from_slice(stdout)?;
    Ok(caller.account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caller_identity() {
        let stdout = br#"{
            "UserId": "AIDAEXAMPLE",
            "Account": "123456789012",
            "Arn": "arn:aws:iam::123456789012:user/dev"
        }"#;
        assert_eq!(parse_caller_identity(stdout).unwrap(), "123456789012");
    }

    #[test]
    fn test_parse_caller_identity_garbage() {
        assert!(matches!(
            parse_caller_identity(b"not json"),
            Err(IdentityError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_incomplete_credentials_skip_the_call() {
        let identity = AwsCliIdentity::new().with_program("/nonexistent/aws");
        let err = identity
            .account_id(&AwsCredentials::default(), "us-east-1")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let identity = AwsCliIdentity::new().with_program("/nonexistent/aws");
        let credentials = AwsCredentials {
            access_key_id: "AKIA".to_string(),
            secret_access_key: "secret".to_string(),
        };
        let err = identity.account_id(&credentials, "us-east-1").await.unwrap_err();
        assert!(matches!(err, IdentityError::Unavailable { .. }));
    }
}
