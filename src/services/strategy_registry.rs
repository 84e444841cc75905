//! Strategy registry: credential type tag -> lazily constructed provider.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::adapters::credentials::{
    AnonymousProvider, ConfigDrivenProvider, EnvironmentVariableProvider, FileSessionProvider,
    InstanceProfileProvider, ProfileProvider, SystemProperties, SystemPropertiesProvider,
};
use crate::domain::errors::{CredentialsError, CredentialsResult, RegistryError};
use crate::domain::models::CredentialsConfig;
use crate::domain::ports::CredentialsProvider;

use super::lazy_singleton::{provider_factory, LazyProvider, ProviderFactory};

pub const CONFIG_STRATEGY: &str = "config";
pub const FILE_STRATEGY: &str = "file";
pub const ENVIRONMENT_STRATEGY: &str = "environment";
pub const SYSTEM_STRATEGY: &str = "system";
pub const PROFILE_STRATEGY: &str = "profile";
pub const INSTANCE_PROFILE_STRATEGY: &str = "instance-profile";
pub const ANONYMOUS_STRATEGY: &str = "anonymous";

/// Tag used when `s3.credential.type` is unset.
pub const DEFAULT_STRATEGY: &str = ANONYMOUS_STRATEGY;

/// Every built-in tag, in registration order.
pub const BUILTIN_STRATEGIES: [&str; 7] = [
    CONFIG_STRATEGY,
    FILE_STRATEGY,
    ENVIRONMENT_STRATEGY,
    SYSTEM_STRATEGY,
    PROFILE_STRATEGY,
    INSTANCE_PROFILE_STRATEGY,
    ANONYMOUS_STRATEGY,
];

/// Registry of credential strategies.
///
/// Each registration owns one [`LazyProvider`], so resolving the same tag
/// twice yields the same instance and the provider is built at most once.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<LazyProvider>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the seven built-in strategies bound to `config`.
    pub fn with_builtin_strategies(
        config: &CredentialsConfig,
        properties: Arc<SystemProperties>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        let access_key = config.access_key.clone();
        let secret_key = config.secret_key.clone();
        registry.register_fn(CONFIG_STRATEGY, move || {
            let provider = ConfigDrivenProvider::new(access_key.clone(), secret_key.clone());
            async move { shared(provider) }
        })?;

        let session_path = config.file_session_credentials.clone();
        registry.register_fn(FILE_STRATEGY, move || {
            let path = session_path.clone();
            async move {
                let path = path.ok_or_else(|| {
                    CredentialsError::unreadable("", "s3.file_session_credentials is not set")
                })?;
                shared(FileSessionProvider::load(path).await?)
            }
        })?;

        registry.register_fn(ENVIRONMENT_STRATEGY, || async {
            shared(EnvironmentVariableProvider::new())
        })?;

        registry.register_fn(SYSTEM_STRATEGY, move || {
            let provider = SystemPropertiesProvider::new(Arc::clone(&properties));
            async move { shared(provider) }
        })?;

        let profile_settings = config.credential.profile.clone();
        registry.register_fn(PROFILE_STRATEGY, move || {
            let provider = ProfileProvider::from_settings(&profile_settings);
            async move { shared(provider) }
        })?;

        let metadata_settings = config.credential.instance_metadata.clone();
        registry.register_fn(INSTANCE_PROFILE_STRATEGY, move || {
            let provider = InstanceProfileProvider::new(&metadata_settings);
            async move { shared(provider?) }
        })?;

        registry.register_fn(ANONYMOUS_STRATEGY, || async {
            shared(AnonymousProvider::new())
        })?;

        Ok(registry)
    }

    /// Register a factory under `tag`. Duplicate tags are rejected.
    ///
    /// Tags may come from runtime configuration; they are owned by the registry.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        factory: ProviderFactory,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if self.strategies.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }
        let provider = Arc::new(LazyProvider::new(tag.clone(), factory));
        self.strategies.insert(tag, provider);
        Ok(())
    }

    /// Register an async closure under `tag`.
    pub fn register_fn<F, Fut>(
        &mut self,
        tag: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CredentialsResult<Arc<dyn CredentialsProvider>>> + Send + 'static,
    {
        self.register(tag, provider_factory(factory))
    }

    /// The provider registered under `tag`. Construction is deferred to first use.
    pub fn resolve(&self, tag: &str) -> Result<Arc<LazyProvider>, RegistryError> {
        self.strategies
            .get(tag)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownStrategy {
                tag: tag.to_string(),
                available: self.tags().into_iter().map(str::to_string).collect(),
            })
    }

    /// Resolve the configured tag, treating unset or blank as [`DEFAULT_STRATEGY`].
    pub fn resolve_configured(&self, tag: Option<&str>) -> Result<Arc<LazyProvider>, RegistryError> {
        self.resolve(effective_strategy(tag))
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.strategies.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

fn shared<P>(provider: P) -> CredentialsResult<Arc<dyn CredentialsProvider>>
where
    P: CredentialsProvider + 'static,
{
    Ok(Arc::new(provider))
}

/// The tag that will be used for a configured `s3.credential.type`.
pub fn effective_strategy(tag: Option<&str>) -> &str {
    match tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag,
        _ => DEFAULT_STRATEGY,
    }
}
