//! Environment variable provider.
//!
//! Delegates to aws-config: `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
//! optionally `AWS_SESSION_TOKEN`, read from the live process environment on
//! every call.

use async_trait::async_trait;
use aws_config::environment::credentials::EnvironmentVariableCredentialsProvider;

use super::sdk;
use crate::domain::errors::CredentialsResult;
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

const PROVIDER_NAME: &str = "environment";

#[derive(Debug)]
pub struct EnvironmentVariableProvider {
    inner: EnvironmentVariableCredentialsProvider,
}

impl EnvironmentVariableProvider {
    pub fn new() -> Self {
        Self {
            inner: EnvironmentVariableCredentialsProvider::new(),
        }
    }

    /// Resolve credentials from the current environment.
    pub async fn load(&self) -> CredentialsResult<Credentials> {
        sdk::provide(PROVIDER_NAME, &self.inner).await
    }
}

impl Default for EnvironmentVariableProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for EnvironmentVariableProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        self.load().await
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        self.load().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CredentialsError;

    const ALL_VARS: [&str; 3] = [
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "AWS_SESSION_TOKEN",
    ];

    fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
        for &(key, value) in vars {
            all.retain(|(k, _)| *k != key);
            all.push((key, Some(value)));
        }
        temp_env::with_vars(all, f)
    }

    fn load() -> CredentialsResult<Credentials> {
        futures::executor::block_on(EnvironmentVariableProvider::new().load())
    }

    #[test]
    fn test_static_credentials_from_env() {
        with_env(
            &[("AWS_ACCESS_KEY_ID", "AK"), ("AWS_SECRET_ACCESS_KEY", "SK")],
            || {
                assert_eq!(load().unwrap(), Credentials::new("AK", "SK"));
            },
        );
    }

    #[test]
    fn test_session_credentials_from_env() {
        with_env(
            &[
                ("AWS_ACCESS_KEY_ID", "AK"),
                ("AWS_SECRET_ACCESS_KEY", "SK"),
                ("AWS_SESSION_TOKEN", "T"),
            ],
            || {
                let creds = load().unwrap();
                assert_eq!(creds.access_key_id(), "AK");
                assert_eq!(creds.session_token(), Some("T"));
            },
        );
    }

    #[test]
    fn test_missing_secret_is_unavailable() {
        with_env(&[("AWS_ACCESS_KEY_ID", "AK")], || {
            assert!(matches!(
                load(),
                Err(CredentialsError::NoCredentialsAvailable {
                    provider: "environment",
                    ..
                })
            ));
        });
    }

    #[test]
    fn test_reads_environment_on_each_call() {
        let provider = EnvironmentVariableProvider::new();
        with_env(&[], || {
            assert!(futures::executor::block_on(provider.load()).is_err());
        });
        with_env(
            &[("AWS_ACCESS_KEY_ID", "AK"), ("AWS_SECRET_ACCESS_KEY", "SK")],
            || {
                assert!(futures::executor::block_on(provider.load()).is_ok());
            },
        );
    }
}
