//! Common test utilities for integration tests
//!
//! Shared fixtures for credential files and configuration.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use custodian::CredentialsConfig;
use mockito::{Mock, ServerGuard};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Properties-style session credentials file contents
pub fn session_properties(access_key: &str, secret_key: &str, token: &str) -> String {
    format!("accessKey={access_key}\nsecretKey={secret_key}\nsessionToken={token}\n")
}

/// Write a session credentials file inside `dir`
pub fn write_session_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("session.properties");
    std::fs::write(&path, contents).expect("Failed to write session file");
    path
}

/// Replace `path` atomically via write-then-rename
pub fn replace_atomically(path: &Path, contents: &str) {
    let staging = path.with_extension("staging");
    std::fs::write(&staging, contents).expect("Failed to write staging file");
    std::fs::rename(&staging, path).expect("Failed to rename staging file");
}

/// Credentials config selecting `strategy`
pub fn config_for(strategy: &str) -> CredentialsConfig {
    let mut config = CredentialsConfig::default();
    config.credential.kind = Some(strategy.to_string());
    config
}

/// Serve an IMDSv2 token plus `role` and its credentials on both the legacy
/// and extended role-listing paths of the instance metadata service.
pub async fn mock_instance_metadata(
    server: &mut ServerGuard,
    role: &str,
    access_key: &str,
    token: &str,
) -> Vec<Mock> {
    let body = serde_json::json!({
        "Code": "Success",
        "LastUpdated": "2024-01-01T00:00:00Z",
        "Type": "AWS-HMAC",
        "AccessKeyId": access_key,
        "SecretAccessKey": "SK",
        "Token": token,
        "Expiration": "2099-01-01T00:00:00Z"
    })
    .to_string();

    let mut mocks = vec![
        server
            .mock("PUT", "/latest/api/token")
            .with_status(200)
            .with_header("x-aws-ec2-metadata-token-ttl-seconds", "21600")
            .with_body("imds-token")
            .create_async()
            .await,
    ];
    for base in [
        "/latest/meta-data/iam/security-credentials/",
        "/latest/meta-data/iam/security-credentials-extended/",
    ] {
        mocks.push(
            server
                .mock("GET", base)
                .with_status(200)
                .with_body(role)
                .create_async()
                .await,
        );
        mocks.push(
            server
                .mock("GET", format!("{base}{role}").as_str())
                .with_status(200)
                .with_body(&body)
                .create_async()
                .await,
        );
    }
    mocks
}
