//! Startup wiring: configured tag -> strategy registry -> credential chain.
//!
//! Registry and strategy-selection errors surface here, before any
//! credentials are requested, so the process never starts with an
//! unresolvable strategy.

use std::sync::Arc;

use tracing::info;

use crate::adapters::credentials::SystemProperties;
use crate::domain::errors::{CredentialsResult, RegistryError};
use crate::domain::models::CredentialsConfig;
use crate::services::{
    effective_strategy, ClientFactory, CredentialChain, StorageClient, StrategyRegistry,
};

/// The active strategy and the chain built around it.
#[derive(Debug)]
pub struct ResolvedCredentials {
    strategy: String,
    registry: StrategyRegistry,
    chain: Arc<CredentialChain>,
}

impl ResolvedCredentials {
    /// Tag of the active strategy.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn chain(&self) -> Arc<CredentialChain> {
        Arc::clone(&self.chain)
    }

    /// Resolve credentials through the chain and build a storage client.
    pub async fn build_client(&self) -> CredentialsResult<StorageClient> {
        ClientFactory::build(self.chain()).await
    }
}

pub struct CredentialBootstrap;

impl CredentialBootstrap {
    /// Bootstrap using the process-wide [`SystemProperties`].
    pub fn from_config(config: &CredentialsConfig) -> Result<ResolvedCredentials, RegistryError> {
        Self::with_properties(config, SystemProperties::global())
    }

    pub fn with_properties(
        config: &CredentialsConfig,
        properties: Arc<SystemProperties>,
    ) -> Result<ResolvedCredentials, RegistryError> {
        let registry = StrategyRegistry::with_builtin_strategies(config, properties)?;
        let strategy = effective_strategy(config.credential.kind.as_deref()).to_string();
        let provider = registry.resolve(&strategy)?;

        info!(strategy = %strategy, "credential strategy selected");

        Ok(ResolvedCredentials {
            strategy,
            registry,
            chain: Arc::new(CredentialChain::single(provider)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_strategy_selects_anonymous() {
        let resolved = CredentialBootstrap::with_properties(
            &CredentialsConfig::default(),
            Arc::new(SystemProperties::new()),
        )
        .unwrap();
        assert_eq!(resolved.strategy(), "anonymous");
        assert_eq!(resolved.chain().provider_names(), vec!["anonymous"]);
    }

    #[test]
    fn test_unknown_strategy_is_fatal() {
        let mut config = CredentialsConfig::default();
        config.credential.kind = Some("bogus".to_string());
        let err = CredentialBootstrap::with_properties(&config, Arc::new(SystemProperties::new()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownStrategy { ref tag, .. } if tag == "bogus"));
    }
}
