//! Credential chain: ordered providers behind one "no credentials" outcome.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

/// Tries each provider in order and returns the first credentials produced.
///
/// The chain keeps no state of its own; caching lives in the providers.
#[derive(Clone)]
pub struct CredentialChain {
    providers: Vec<Arc<dyn CredentialsProvider>>,
}

impl CredentialChain {
    pub fn new(providers: Vec<Arc<dyn CredentialsProvider>>) -> Self {
        Self { providers }
    }

    /// Chain over the single active strategy.
    pub fn single(provider: Arc<dyn CredentialsProvider>) -> Self {
        Self::new(vec![provider])
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl std::fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}

#[async_trait]
impl CredentialsProvider for CredentialChain {
    fn name(&self) -> &str {
        "chain"
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.credentials().await {
                Ok(credentials) => {
                    debug!(provider = provider.name(), kind = %credentials.kind(), "credentials resolved");
                    return Ok(credentials);
                }
                Err(err) => {
                    debug!(provider = provider.name(), error = %err, "provider yielded no credentials");
                    attempts.push(format!("{}: {err}", provider.name()));
                }
            }
        }

        warn!(attempts = ?attempts, "credential chain exhausted");
        Err(CredentialsError::CredentialChainExhausted { attempts })
    }

    /// Refreshes every provider; the first failure is returned unchanged.
    async fn refresh(&self) -> CredentialsResult<()> {
        for provider in &self.providers {
            provider.refresh().await?;
        }
        Ok(())
    }
}
