//! Shared credentials file provider (`~/.aws/credentials`).
//!
//! Parsing and profile resolution are delegated to aws-config. The parsed
//! file is kept until `refresh`, which rebuilds the underlying provider so
//! edits on disk are picked up.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use tokio::sync::RwLock;
use tracing::debug;

use super::sdk;
use crate::domain::errors::CredentialsResult;
use crate::domain::models::{Credentials, ProfileSettings};
use crate::domain::ports::CredentialsProvider;

pub const DEFAULT_PROFILE: &str = "default";
const PROFILE_ENV_VAR: &str = "AWS_PROFILE";
const CREDENTIALS_FILE_ENV_VAR: &str = "AWS_SHARED_CREDENTIALS_FILE";
const PROVIDER_NAME: &str = "profile";

/// Reads one named profile from a shared credentials file.
#[derive(Debug)]
pub struct ProfileProvider {
    path: Option<PathBuf>,
    profile: String,
    inner: RwLock<Arc<ProfileFileCredentialsProvider>>,
}

impl ProfileProvider {
    pub fn new(path: Option<PathBuf>, profile: impl Into<String>) -> Self {
        let profile = profile.into();
        let inner = build_inner(path.as_ref(), &profile);
        Self {
            path,
            profile,
            inner: RwLock::new(Arc::new(inner)),
        }
    }

    /// Resolve the file and profile name from settings, then the environment.
    pub fn from_settings(settings: &ProfileSettings) -> Self {
        let path = settings
            .path
            .clone()
            .or_else(|| std::env::var_os(CREDENTIALS_FILE_ENV_VAR).map(PathBuf::from))
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".aws/credentials"))
            });
        let profile = settings
            .name
            .clone()
            .or_else(|| std::env::var(PROFILE_ENV_VAR).ok())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        Self::new(path, profile)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    async fn load(&self) -> CredentialsResult<Credentials> {
        let inner = Arc::clone(&*self.inner.read().await);
        let credentials = sdk::provide(PROVIDER_NAME, inner.as_ref()).await?;
        debug!(profile = %self.profile, "read shared credentials profile");
        Ok(credentials)
    }
}

/// Without an explicit path, aws-config falls back to its own default file locations.
#[allow(deprecated)]
fn build_inner(path: Option<&PathBuf>, profile: &str) -> ProfileFileCredentialsProvider {
    use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};

    let builder = ProfileFileCredentialsProvider::builder().profile_name(profile);
    match path {
        Some(path) => builder
            .profile_files(
                ProfileFiles::builder()
                    .with_file(ProfileFileKind::Credentials, path)
                    .build(),
            )
            .build(),
        None => builder.build(),
    }
}

#[async_trait]
impl CredentialsProvider for ProfileProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        self.load().await
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        *self.inner.write().await = Arc::new(build_inner(self.path.as_ref(), &self.profile));
        self.load().await.map(|_| ())
    }
}
