//! Anonymous provider: the default strategy.

use async_trait::async_trait;

use crate::domain::errors::CredentialsResult;
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

/// Always yields all-empty credentials, the explicit "unauthenticated" signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousProvider;

impl AnonymousProvider {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialsProvider for AnonymousProvider {
    fn name(&self) -> &str {
        "anonymous"
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        Ok(Credentials::anonymous())
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_returns_empty_credentials() {
        let provider = AnonymousProvider::new();
        for _ in 0..3 {
            let creds = provider.credentials().await.unwrap();
            assert_eq!(creds.access_key_id(), "");
            assert_eq!(creds.secret_key(), "");
            assert!(creds.session_token().is_none());
            assert!(creds.is_anonymous());
        }
        provider.refresh().await.unwrap();
    }
}
