//! Instance metadata service provider (IMDSv2).

use std::time::Duration;

use async_trait::async_trait;
use aws_config::imds;
use aws_config::imds::credentials::ImdsCredentialsProvider;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::sdk;
use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::{Credentials, InstanceMetadataSettings};
use crate::domain::ports::CredentialsProvider;

const PROVIDER_NAME: &str = "instance-profile";

/// Fetches role credentials from the local instance metadata service.
///
/// The last successful fetch is cached; `refresh` always goes back to the service.
#[derive(Debug)]
pub struct InstanceProfileProvider {
    inner: ImdsCredentialsProvider,
    cached: RwLock<Option<Credentials>>,
}

impl InstanceProfileProvider {
    pub fn new(settings: &InstanceMetadataSettings) -> CredentialsResult<Self> {
        let timeout = Duration::from_millis(settings.timeout_ms);
        let client = imds::Client::builder()
            .endpoint(settings.endpoint.trim_end_matches('/'))
            .map_err(|e| {
                CredentialsError::unavailable(
                    PROVIDER_NAME,
                    format!("invalid metadata endpoint '{}': {e}", settings.endpoint),
                )
            })?
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build();

        Ok(Self {
            inner: ImdsCredentialsProvider::builder().imds_client(client).build(),
            cached: RwLock::new(None),
        })
    }

    async fn fetch(&self) -> CredentialsResult<Credentials> {
        let credentials = sdk::provide(PROVIDER_NAME, &self.inner).await?;
        debug!(access_key = %credentials.masked_access_key(), "fetched instance profile credentials");
        Ok(credentials)
    }
}

#[async_trait]
impl CredentialsProvider for InstanceProfileProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        if let Some(cached) = self.cached.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let mut cached = self.cached.write().await;
        if let Some(existing) = cached.as_ref() {
            return Ok(existing.clone());
        }
        let credentials = self.fetch().await?;
        *cached = Some(credentials.clone());
        Ok(credentials)
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        let credentials = self.fetch().await?;
        let masked = credentials.masked_access_key();
        *self.cached.write().await = Some(credentials);

        info!(access_key = %masked, "refreshed instance profile credentials");
        Ok(())
    }
}
