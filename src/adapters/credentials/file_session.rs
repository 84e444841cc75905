//! File-backed session credentials.
//!
//! The file is either Java-properties style:
//!
//! ```text
//! # rotated by the token agent
//! accessKey=AKIA...
//! secretKey=...
//! sessionToken=...
//! ```
//!
//! or a JSON object with `accessKey`, `secretKey` and `sessionToken` (or `token`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::Credentials;
use crate::domain::ports::CredentialsProvider;

const ACCESS_KEY: &str = "accessKey";
const SECRET_KEY: &str = "secretKey";
const SESSION_TOKEN: &str = "sessionToken";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    access_key: Option<String>,
    secret_key: Option<String>,
    #[serde(alias = "token")]
    session_token: Option<String>,
}

/// Session credentials read from a file and swapped wholesale on refresh.
#[derive(Debug)]
pub struct FileSessionProvider {
    path: PathBuf,
    current: RwLock<Credentials>,
}

impl FileSessionProvider {
    /// Parse `path` once and cache the result.
    pub async fn load(path: impl Into<PathBuf>) -> CredentialsResult<Self> {
        let path = path.into();
        let credentials = read_session_file(&path).await?;
        debug!(
            path = %path.display(),
            access_key = %credentials.masked_access_key(),
            "loaded session credentials file"
        );

        Ok(Self {
            path,
            current: RwLock::new(credentials),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialsProvider for FileSessionProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn credentials(&self) -> CredentialsResult<Credentials> {
        Ok(self.current.read().await.clone())
    }

    async fn refresh(&self) -> CredentialsResult<()> {
        // Parse outside the lock; the write only swaps a complete record.
        let credentials = read_session_file(&self.path).await?;
        let masked = credentials.masked_access_key();
        *self.current.write().await = credentials;

        info!(path = %self.path.display(), access_key = %masked, "refreshed session credentials");
        Ok(())
    }
}

async fn read_session_file(path: &Path) -> CredentialsResult<Credentials> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CredentialsError::unreadable(path, e.to_string()))?;
    parse_session_file(&contents).map_err(|reason| CredentialsError::unreadable(path, reason))
}

/// Parse session file contents into credentials.
pub fn parse_session_file(contents: &str) -> Result<Credentials, String> {
    let file = if contents.trim_start().starts_with('{') {
        serde_json::from_str::<SessionFile>(contents).map_err(|e| format!("invalid JSON: {e}"))?
    } else {
        let mut properties = parse_properties(contents);
        SessionFile {
            access_key: properties.remove(ACCESS_KEY),
            secret_key: properties.remove(SECRET_KEY),
            session_token: properties.remove(SESSION_TOKEN),
        }
    };

    let access_key = require(file.access_key, ACCESS_KEY)?;
    let secret_key = require(file.secret_key, SECRET_KEY)?;
    let session_token = require(file.session_token, SESSION_TOKEN)?;

    Credentials::session(access_key, secret_key, session_token).map_err(|e| e.to_string())
}

fn require(value: Option<String>, key: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("missing '{key}'")),
    }
}

fn parse_properties(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let split = line.find(['=', ':'])?;
            let (key, value) = line.split_at(split);
            Some((key.trim().to_string(), value[1..].trim().to_string()))
        })
        .collect()
}
