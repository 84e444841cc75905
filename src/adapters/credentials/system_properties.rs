//! Process-local properties and the provider that reads credentials from them.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

pub const ACCESS_KEY_PROPERTY: &str = "aws.accessKeyId";
pub const SECRET_KEY_PROPERTY: &str = "aws.secretKey";
pub const SESSION_TOKEN_PROPERTY: &str = "aws.sessionToken";

const PROVIDER_NAME: &str = "system";

static GLOBAL_PROPERTIES: OnceLock<Arc<SystemProperties>> = OnceLock::new();

/// String key/value properties scoped to this process.
#[derive(Debug, Default)]
pub struct SystemProperties {
    values: RwLock<HashMap<String, String>>,
}

impl SystemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance populated by the CLI `-D key=value` flags.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL_PROPERTIES.get_or_init(|| Arc::new(Self::new())))
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Parse and store a `key=value` assignment.
    pub fn set_assignment(&self, assignment: &str) -> Result<(), String> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{assignment}'"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty property name in '{assignment}'"));
        }
        self.set(key, value.trim());
        Ok(())
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Reads `aws.accessKeyId`, `aws.secretKey` and optionally `aws.sessionToken`.
#[derive(Debug, Clone)]
pub struct SystemPropertiesProvider {
    properties: Arc<SystemProperties>,
}

impl SystemPropertiesProvider {
    pub fn new(properties: Arc<SystemProperties>) -> Self {
        Self { properties }
    }

    fn load(&self) -> CredentialsResult<Credentials> {
        let access_key = self.properties.non_empty(ACCESS_KEY_PROPERTY);
        let secret_key = self.properties.non_empty(SECRET_KEY_PROPERTY);

        let (Some(access_key), Some(secret_key)) = (access_key, secret_key) else {
            return Err(CredentialsError::unavailable(
                PROVIDER_NAME,
                format!("{ACCESS_KEY_PROPERTY} and {SECRET_KEY_PROPERTY} must be set"),
            ));
        };

        match self.properties.non_empty(SESSION_TOKEN_PROPERTY) {
            Some(token) => Credentials::session(access_key, secret_key, token),
            None => Ok(Credentials::new(access_key, secret_key)),
        }
    }
}

impl Default for SystemPropertiesProvider {
    fn default() -> Self {
        Self::new(SystemProperties::global())
    }
}

#[async_trait]
impl CredentialsProvider for SystemPropertiesProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        self.load()
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        self.load().map(|_| ())
    }
}
