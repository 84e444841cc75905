//! Construct-once holders for credential providers.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

/// Builds a provider. Called at most once per successful construction.
pub type ProviderFactory = Arc<
    dyn Fn() -> BoxFuture<'static, CredentialsResult<Arc<dyn CredentialsProvider>>> + Send + Sync,
>;

/// Wrap an async closure as a [`ProviderFactory`].
pub fn provider_factory<F, Fut>(factory: F) -> ProviderFactory
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CredentialsResult<Arc<dyn CredentialsProvider>>> + Send + 'static,
{
    Arc::new(move || factory().boxed())
}

/// Holds a value that is built on first access and shared afterwards.
///
/// Concurrent first callers wait on a single construction; a failed
/// construction leaves the holder empty so a later call can retry.
#[derive(Debug)]
pub struct LazySingleton<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> LazySingleton<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<T>, E>>,
    {
        self.cell.get_or_try_init(init).await.map(Arc::clone)
    }

    /// The instance, if already constructed.
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

impl<T: ?Sized> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A provider whose underlying instance is built on first use.
pub struct LazyProvider {
    name: String,
    factory: ProviderFactory,
    instance: LazySingleton<dyn CredentialsProvider>,
}

impl LazyProvider {
    pub fn new(name: impl Into<String>, factory: ProviderFactory) -> Self {
        Self {
            name: name.into(),
            factory,
            instance: LazySingleton::new(),
        }
    }

    /// The underlying provider, constructing it if needed.
    pub async fn instance(&self) -> CredentialsResult<Arc<dyn CredentialsProvider>> {
        self.instance
            .get_or_try_init(|| async {
                let provider = (self.factory)().await?;
                debug!(strategy = %self.name, "constructed credentials provider");
                Ok::<_, CredentialsError>(provider)
            })
            .await
    }

    pub fn is_constructed(&self) -> bool {
        self.instance.is_initialized()
    }
}

impl std::fmt::Debug for LazyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyProvider")
            .field("name", &self.name)
            .field("constructed", &self.is_constructed())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialsProvider for LazyProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        self.instance().await?.credentials().await
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        self.instance().await?.refresh().await
    }
}
