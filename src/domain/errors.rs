//! Domain errors for credential resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Format a list of chain attempts as `a; b; c`, or a placeholder when empty.
fn format_attempts(attempts: &[String]) -> String {
    if attempts.is_empty() {
        "no providers configured".to_string()
    } else {
        attempts.join("; ")
    }
}

/// Strategy registry errors.
///
/// Both variants are fatal at process configuration time: the process must not
/// start with an ambiguous or unresolvable credential strategy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Credential strategy '{0}' is already registered")]
    DuplicateTag(String),

    #[error("Unknown credential strategy '{tag}'. Available: {}", .available.join(", "))]
    UnknownStrategy { tag: String, available: Vec<String> },
}

/// Errors raised while producing or refreshing credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Unable to load credentials from configuration: access_key and secret_key must both be set")]
    MissingCredentialsConfig,

    #[error("Credential file {} is unreadable: {reason}", .path.display())]
    CredentialFileUnreadable { path: PathBuf, reason: String },

    #[error("No credentials available from {provider}: {reason}")]
    NoCredentialsAvailable {
        provider: &'static str,
        reason: String,
    },

    #[error("Session credentials require an access key, a secret key and a non-empty session token")]
    IncompleteSessionCredentials,

    #[error("Unable to load credentials from any provider in the chain: {}", format_attempts(.attempts))]
    CredentialChainExhausted { attempts: Vec<String> },
}

impl CredentialsError {
    /// Shorthand for [`CredentialsError::NoCredentialsAvailable`].
    pub fn unavailable(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::NoCredentialsAvailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CredentialsError::CredentialFileUnreadable`].
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CredentialFileUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type CredentialsResult<T> = Result<T, CredentialsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_lists_available_tags() {
        let err = RegistryError::UnknownStrategy {
            tag: "bogus".to_string(),
            available: vec!["anonymous".to_string(), "config".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("'bogus'"));
        assert!(message.contains("anonymous, config"));
    }

    #[test]
    fn test_chain_exhausted_message() {
        let err = CredentialsError::CredentialChainExhausted {
            attempts: vec!["config: missing".to_string(), "environment: unset".to_string()],
        };
        assert!(err.to_string().ends_with("config: missing; environment: unset"));

        let empty = CredentialsError::CredentialChainExhausted { attempts: vec![] };
        assert!(empty.to_string().contains("no providers configured"));
    }
}
