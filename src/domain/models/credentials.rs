use std::fmt;

use serde::Serialize;

use crate::domain::errors::{CredentialsError, CredentialsResult};

/// Which construction path a set of credentials belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsKind {
    /// Both keys empty, no token.
    Anonymous,
    /// Access key / secret key pair.
    Static,
    /// Key pair plus a session token.
    Session,
}

impl CredentialsKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Static => "static",
            Self::Session => "session",
        }
    }
}

impl fmt::Display for CredentialsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable object-storage credentials.
///
/// A session token is only ever present, non-empty, together with a
/// non-empty key pair, so a session credential is never anonymous.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Static credentials from a key pair.
    pub fn new(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }

    /// Session credentials. Fails if either key or the token is empty.
    pub fn session(
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> CredentialsResult<Self> {
        let access_key_id = access_key_id.into();
        let secret_key = secret_key.into();
        let session_token = session_token.into();
        if access_key_id.is_empty() || secret_key.is_empty() || session_token.is_empty() {
            return Err(CredentialsError::IncompleteSessionCredentials);
        }

        Ok(Self {
            access_key_id,
            secret_key,
            session_token: Some(session_token),
        })
    }

    /// The explicit "unauthenticated" credentials.
    pub const fn anonymous() -> Self {
        Self {
            access_key_id: String::new(),
            secret_key: String::new(),
            session_token: None,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn kind(&self) -> CredentialsKind {
        if self.session_token.is_some() {
            CredentialsKind::Session
        } else if self.access_key_id.is_empty() && self.secret_key.is_empty() {
            CredentialsKind::Anonymous
        } else {
            CredentialsKind::Static
        }
    }

    pub fn is_session(&self) -> bool {
        self.kind() == CredentialsKind::Session
    }

    pub fn is_anonymous(&self) -> bool {
        self.kind() == CredentialsKind::Anonymous
    }

    /// Access key safe for logs and terminal output.
    pub fn masked_access_key(&self) -> String {
        mask_secret(&self.access_key_id)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.masked_access_key())
            .field("secret_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Keep at most the first four characters of a secret.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Credentials::anonymous().kind(), CredentialsKind::Anonymous);
        assert_eq!(Credentials::new("AK", "SK").kind(), CredentialsKind::Static);
        assert_eq!(
            Credentials::session("AK", "SK", "T").unwrap().kind(),
            CredentialsKind::Session
        );
    }

    #[test]
    fn test_session_requires_token() {
        let err = Credentials::session("AK", "SK", "").unwrap_err();
        assert_eq!(err, CredentialsError::IncompleteSessionCredentials);
        assert!(err.to_string().contains("session token"));
    }

    #[test]
    fn test_session_requires_both_keys() {
        assert_eq!(
            Credentials::session("", "SK", "T"),
            Err(CredentialsError::IncompleteSessionCredentials)
        );
        assert_eq!(
            Credentials::session("AK", "", "T"),
            Err(CredentialsError::IncompleteSessionCredentials)
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::session("AKIAEXAMPLE", "super-secret", "token-value").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIA****"));
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("token-value"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("AK"), "AK****");
        assert_eq!(mask_secret("AKIAIOSFODNN7"), "AKIA****");
    }
}
