//! Bridge from aws-config credential providers to [`CredentialsProvider`].
//!
//! [`CredentialsProvider`]: crate::domain::ports::CredentialsProvider

use std::error::Error;

use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials as SdkCredentials;

use crate::domain::errors::{CredentialsError, CredentialsResult};
use crate::domain::models::Credentials;

/// Ask `provider` for credentials; every SDK failure becomes `NoCredentialsAvailable`.
pub(crate) async fn provide<P>(provider_name: &'static str, provider: &P) -> CredentialsResult<Credentials>
where
    P: ProvideCredentials,
{
    let credentials = provider
        .provide_credentials()
        .await
        .map_err(|e| CredentialsError::unavailable(provider_name, error_chain(&e)))?;
    from_sdk_credentials(provider_name, &credentials)
}

/// Convert SDK credentials, rejecting blank keys.
///
/// A blank token is treated as absent, so the result is static credentials.
pub fn from_sdk_credentials(
    provider_name: &'static str,
    credentials: &SdkCredentials,
) -> CredentialsResult<Credentials> {
    let access_key = credentials.access_key_id().trim();
    let secret_key = credentials.secret_access_key().trim();
    if access_key.is_empty() || secret_key.is_empty() {
        return Err(CredentialsError::unavailable(
            provider_name,
            "returned an empty access key or secret key",
        ));
    }

    match credentials.session_token().map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => Credentials::session(access_key, secret_key, token),
        None => Ok(Credentials::new(access_key, secret_key)),
    }
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdk(access_key: &str, secret_key: &str, token: Option<&str>) -> SdkCredentials {
        SdkCredentials::new(access_key, secret_key, token.map(str::to_string), None, "test")
    }

    #[test]
    fn test_static_and_session_conversion() {
        assert_eq!(
            from_sdk_credentials("test", &sdk("AK", "SK", None)).unwrap(),
            Credentials::new("AK", "SK")
        );

        let session = from_sdk_credentials("test", &sdk("AK", "SK", Some("T"))).unwrap();
        assert_eq!(session.session_token(), Some("T"));

        let blank_token = from_sdk_credentials("test", &sdk("AK", "SK", Some(" "))).unwrap();
        assert!(!blank_token.is_session());
    }

    #[test]
    fn test_empty_keys_are_unavailable() {
        for (access_key, secret_key, token) in [
            ("", "SK", None),
            ("AK", "", None),
            ("", "SK", Some("T")),
            ("  ", "SK", Some("T")),
        ] {
            let err = from_sdk_credentials("instance-profile", &sdk(access_key, secret_key, token))
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    CredentialsError::NoCredentialsAvailable {
                        provider: "instance-profile",
                        ..
                    }
                ),
                "access_key={access_key:?} secret_key={secret_key:?} got {err:?}"
            );
        }
    }
}
