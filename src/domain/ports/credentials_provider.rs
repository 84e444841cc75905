//! Credentials provider port - the capability every strategy fulfils.

use async_trait::async_trait;

use crate::domain::errors::CredentialsResult;
use crate::domain::models::Credentials;

/// Produces and refreshes credentials for one strategy.
///
/// Implementations are shared across tasks, so `credentials` and `refresh`
/// may run concurrently. Replacing cached credentials must be atomic: a
/// reader sees either the old record or the new one, never a mix.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Provider name for logs and chain diagnostics.
    fn name(&self) -> &str;

    /// Current credentials.
    async fn credentials(&self) -> CredentialsResult<Credentials>;

    /// Re-fetch credentials from the underlying source. Idempotent.
    async fn refresh(&self) -> CredentialsResult<()>;
}
