//! Storage client construction from resolved credentials.
//!
//! Session and static credentials take different construction paths and are
//! not interchangeable: a session client keeps its provider so rotated tokens
//! are picked up, a static client owns a fixed key pair.

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::{Credentials, CredentialsKind};
use crate::domain::ports::CredentialsProvider;

/// Two-field credentials for a static client.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_key: String,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Three-field view of session credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub access_key_id: String,
    pub secret_key: String,
    pub session_token: String,
}

impl SessionCredentials {
    fn from_credentials(credentials: &Credentials) -> CredentialsResult<Self> {
        let session_token = credentials
            .session_token()
            .ok_or(CredentialsError::IncompleteSessionCredentials)?;
        Ok(Self {
            access_key_id: credentials.access_key_id().to_string(),
            secret_key: credentials.secret_key().to_string(),
            session_token: session_token.to_string(),
        })
    }
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}

/// Session credentials bound to the provider that issues them.
#[derive(Clone)]
pub struct SessionCredentialsAdapter {
    provider: Arc<dyn CredentialsProvider>,
    snapshot: SessionCredentials,
}

impl SessionCredentialsAdapter {
    /// Credentials the client was built with.
    pub fn snapshot(&self) -> &SessionCredentials {
        &self.snapshot
    }

    /// Current credentials from the provider, reflecting any refresh.
    pub async fn current(&self) -> CredentialsResult<SessionCredentials> {
        let credentials = self.provider.credentials().await?;
        SessionCredentials::from_credentials(&credentials)
    }
}

impl std::fmt::Debug for SessionCredentialsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentialsAdapter")
            .field("provider", &self.provider.name())
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

/// How a storage client authenticates.
#[derive(Debug, Clone)]
pub enum ClientAuth {
    Static(StaticCredentials),
    Session(SessionCredentialsAdapter),
}

/// Object-storage client handle produced by [`ClientFactory`].
#[derive(Debug, Clone)]
pub struct StorageClient {
    auth: ClientAuth,
}

impl StorageClient {
    pub fn auth(&self) -> &ClientAuth {
        &self.auth
    }

    /// `false` only for the all-empty static (anonymous) case.
    pub fn is_authenticated(&self) -> bool {
        match &self.auth {
            ClientAuth::Static(creds) => {
                !(creds.access_key_id.is_empty() && creds.secret_key.is_empty())
            }
            ClientAuth::Session(_) => true,
        }
    }

    pub fn kind(&self) -> CredentialsKind {
        match &self.auth {
            ClientAuth::Session(_) => CredentialsKind::Session,
            ClientAuth::Static(_) if self.is_authenticated() => CredentialsKind::Static,
            ClientAuth::Static(_) => CredentialsKind::Anonymous,
        }
    }

    pub fn access_key_id(&self) -> &str {
        match &self.auth {
            ClientAuth::Static(creds) => &creds.access_key_id,
            ClientAuth::Session(adapter) => &adapter.snapshot.access_key_id,
        }
    }
}

/// Builds storage clients, branching on the presence of a session token.
pub struct ClientFactory;

impl ClientFactory {
    /// Resolve credentials from `provider` and build the matching client.
    pub async fn build(provider: Arc<dyn CredentialsProvider>) -> CredentialsResult<StorageClient> {
        let credentials = provider.credentials().await?;

        let auth = if credentials.is_session() {
            ClientAuth::Session(SessionCredentialsAdapter {
                snapshot: SessionCredentials::from_credentials(&credentials)?,
                provider,
            })
        } else {
            ClientAuth::Static(StaticCredentials {
                access_key_id: credentials.access_key_id().to_string(),
                secret_key: credentials.secret_key().to_string(),
            })
        };
        let client = StorageClient { auth };

        info!(
            kind = %client.kind(),
            access_key = %credentials.masked_access_key(),
            "storage client constructed"
        );
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::system_properties::{
        ACCESS_KEY_PROPERTY, SECRET_KEY_PROPERTY, SESSION_TOKEN_PROPERTY,
    };
    use crate::adapters::credentials::{
        AnonymousProvider, ConfigDrivenProvider, SystemProperties, SystemPropertiesProvider,
    };

    #[tokio::test]
    async fn test_static_branch() {
        let provider = Arc::new(ConfigDrivenProvider::new(
            Some("AK".to_string()),
            Some("SK".to_string()),
        ));
        let client = ClientFactory::build(provider).await.unwrap();
        match client.auth() {
            ClientAuth::Static(creds) => {
                assert_eq!(creds.access_key_id, "AK");
                assert_eq!(creds.secret_key, "SK");
            }
            ClientAuth::Session(_) => panic!("Expected static client"),
        }
        assert!(client.is_authenticated());
        assert_eq!(client.kind(), CredentialsKind::Static);
    }

    #[tokio::test]
    async fn test_anonymous_builds_unauthenticated_static_client() {
        let client = ClientFactory::build(Arc::new(AnonymousProvider::new()))
            .await
            .unwrap();
        assert!(matches!(client.auth(), ClientAuth::Static(_)));
        assert!(!client.is_authenticated());
        assert_eq!(client.kind(), CredentialsKind::Anonymous);
    }

    #[tokio::test]
    async fn test_session_branch_tracks_provider() {
        let props = Arc::new(SystemProperties::new());
        props.set(ACCESS_KEY_PROPERTY, "AK");
        props.set(SECRET_KEY_PROPERTY, "SK");
        props.set(SESSION_TOKEN_PROPERTY, "T1");

        let provider = Arc::new(SystemPropertiesProvider::new(Arc::clone(&props)));
        let client = ClientFactory::build(provider).await.unwrap();
        let ClientAuth::Session(adapter) = client.auth() else {
            panic!("Expected session client");
        };
        assert_eq!(adapter.snapshot().session_token, "T1");

        props.set(SESSION_TOKEN_PROPERTY, "T2");
        assert_eq!(adapter.current().await.unwrap().session_token, "T2");
        assert_eq!(adapter.snapshot().session_token, "T1");
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let err = ClientFactory::build(Arc::new(ConfigDrivenProvider::new(None, None)))
            .await
            .unwrap_err();
        assert_eq!(err, CredentialsError::MissingCredentialsConfig);
    }
}
