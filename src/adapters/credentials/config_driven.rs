//! Config-driven provider: static keys from `s3.access_key` / `s3.secret_key`.

use async_trait::async_trait;

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::{Credentials, CredentialsConfig};
use crate::domain::ports::CredentialsProvider;

#[derive(Debug, Clone)]
pub struct ConfigDrivenProvider {
    access_key: Option<String>,
    secret_key: Option<String>,
}

impl ConfigDrivenProvider {
    pub fn new(access_key: Option<String>, secret_key: Option<String>) -> Self {
        Self {
            access_key,
            secret_key,
        }
    }

    pub fn from_config(config: &CredentialsConfig) -> Self {
        Self::new(config.access_key.clone(), config.secret_key.clone())
    }
}

#[async_trait]
impl CredentialsProvider for ConfigDrivenProvider {
    fn name(&self) -> &str {
        "config"
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        match (self.access_key.as_deref(), self.secret_key.as_deref()) {
            (Some(access_key), Some(secret_key))
                if !access_key.is_empty() && !secret_key.is_empty() =>
            {
                Ok(Credentials::new(access_key, secret_key))
            }
            _ => Err(CredentialsError::MissingCredentialsConfig),
        }
    }

    // Static values never change.
    async fn refresh(&self) -> CredentialsResult<()> {
        Ok(())
    }
}
