//! End-to-end credential resolution: configuration -> registry -> chain -> client.

mod common;

use std::sync::Arc;

use custodian::adapters::credentials::SystemProperties;
use custodian::{
    ClientAuth, CredentialBootstrap, CredentialsConfig, CredentialsError, CredentialsKind,
    CredentialsProvider, RegistryError,
};

fn bootstrap(config: &CredentialsConfig) -> custodian::ResolvedCredentials {
    CredentialBootstrap::with_properties(config, Arc::new(SystemProperties::new()))
        .expect("bootstrap should succeed")
}

#[tokio::test]
async fn test_config_strategy_builds_static_client() {
    let mut config = common::config_for("config");
    config.access_key = Some("AK".to_string());
    config.secret_key = Some("SK".to_string());

    let client = bootstrap(&config).build_client().await.unwrap();

    match client.auth() {
        ClientAuth::Static(creds) => {
            assert_eq!(creds.access_key_id, "AK");
            assert_eq!(creds.secret_key, "SK");
        }
        ClientAuth::Session(_) => panic!("Expected static client"),
    }
    assert_eq!(client.kind(), CredentialsKind::Static);
}

#[tokio::test]
async fn test_file_strategy_builds_session_client() {
    let dir = common::temp_dir();
    let path = common::write_session_file(
        dir.path(),
        r#"{"accessKey": "AK", "secretKey": "SK", "token": "T"}"#,
    );

    let mut config = common::config_for("file");
    config.file_session_credentials = Some(path);

    let client = bootstrap(&config).build_client().await.unwrap();

    let ClientAuth::Session(adapter) = client.auth() else {
        panic!("Expected session client");
    };
    let snapshot = adapter.snapshot();
    assert_eq!(snapshot.access_key_id, "AK");
    assert_eq!(snapshot.secret_key, "SK");
    assert_eq!(snapshot.session_token, "T");
}

#[tokio::test]
async fn test_unset_strategy_builds_unauthenticated_client() {
    let resolved = bootstrap(&CredentialsConfig::default());
    assert_eq!(resolved.strategy(), "anonymous");

    let client = resolved.build_client().await.unwrap();
    assert!(matches!(client.auth(), ClientAuth::Static(_)));
    assert!(!client.is_authenticated());
    assert_eq!(client.access_key_id(), "");
}

#[test]
fn test_bogus_strategy_fails_at_startup() {
    let err = CredentialBootstrap::with_properties(
        &common::config_for("bogus"),
        Arc::new(SystemProperties::new()),
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownStrategy { .. }));
}

#[tokio::test]
async fn test_config_strategy_without_keys_exhausts_chain() {
    let resolved = bootstrap(&common::config_for("config"));
    let err = resolved.build_client().await.unwrap_err();
    match err {
        CredentialsError::CredentialChainExhausted { attempts } => {
            assert_eq!(attempts.len(), 1);
            assert!(attempts[0].starts_with("config: "));
        }
        other => panic!("Expected CredentialChainExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_error_is_not_wrapped_by_chain() {
    let mut config = common::config_for("file");
    config.file_session_credentials = Some("/nonexistent/custodian/session".into());

    let resolved = bootstrap(&config);
    assert!(matches!(
        resolved.chain().refresh().await,
        Err(CredentialsError::CredentialFileUnreadable { .. })
    ));
    assert!(matches!(
        resolved.chain().credentials().await,
        Err(CredentialsError::CredentialChainExhausted { .. })
    ));
}

#[tokio::test]
async fn test_system_strategy_reads_injected_properties() {
    let properties = Arc::new(SystemProperties::new());
    properties.set("aws.accessKeyId", "AK");
    properties.set("aws.secretKey", "SK");
    properties.set("aws.sessionToken", "T");

    let resolved =
        CredentialBootstrap::with_properties(&common::config_for("system"), properties).unwrap();
    let client = resolved.build_client().await.unwrap();
    assert_eq!(client.kind(), CredentialsKind::Session);
}

#[tokio::test]
async fn test_profile_strategy_reads_configured_file() {
    let dir = common::temp_dir();
    let path = dir.path().join("credentials");
    std::fs::write(
        &path,
        "[default]\naws_access_key_id = AK\naws_secret_access_key = SK\n",
    )
    .unwrap();

    let mut config = common::config_for("profile");
    config.credential.profile.path = Some(path);
    config.credential.profile.name = Some("default".to_string());

    let client = bootstrap(&config).build_client().await.unwrap();
    assert_eq!(client.kind(), CredentialsKind::Static);
    assert_eq!(client.access_key_id(), "AK");
}

#[tokio::test]
async fn test_instance_profile_strategy_against_metadata_service() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = common::mock_instance_metadata(&mut server, "storage-role", "AK", "T").await;

    let mut config = common::config_for("instance-profile");
    config.credential.instance_metadata.endpoint = server.url();

    let client = bootstrap(&config).build_client().await.unwrap();
    let ClientAuth::Session(adapter) = client.auth() else {
        panic!("Expected session client");
    };
    assert_eq!(adapter.snapshot().access_key_id, "AK");
    assert_eq!(adapter.snapshot().session_token, "T");
}

#[tokio::test]
async fn test_instance_profile_with_blank_key_exhausts_chain() {
    let mut server = mockito::Server::new_async().await;
    let _mocks = common::mock_instance_metadata(&mut server, "storage-role", "", "T").await;

    let mut config = common::config_for("instance-profile");
    config.credential.instance_metadata.endpoint = server.url();

    match bootstrap(&config).build_client().await {
        Err(CredentialsError::CredentialChainExhausted { attempts }) => {
            assert!(attempts[0].starts_with("instance-profile: "));
        }
        other => panic!("Expected CredentialChainExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_environment_strategy_reads_process_environment() {
    let resolved = bootstrap(&common::config_for("environment"));

    let client = temp_env::async_with_vars(
        [
            ("AWS_ACCESS_KEY_ID", Some("AK_ENV")),
            ("AWS_SECRET_ACCESS_KEY", Some("SK_ENV")),
            ("AWS_SESSION_TOKEN", None),
        ],
        resolved.build_client(),
    )
    .await
    .unwrap();

    assert_eq!(client.kind(), CredentialsKind::Static);
    assert_eq!(client.access_key_id(), "AK_ENV");
}
