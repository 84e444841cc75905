use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Custodian
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Object-storage credential configuration
    #[serde(default)]
    pub s3: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credential configuration, read once at startup and immutable thereafter.
///
/// `access_key` and `secret_key` are either both set or both absent.
/// Unset keys are not serialized, so layered defaults never shadow a
/// camelCase spelling supplied by a later layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Strategy selection and per-strategy settings
    #[serde(default)]
    pub credential: CredentialSettings,

    /// Static access key for the `config` strategy
    #[serde(default, alias = "accessKey", skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Static secret key for the `config` strategy
    #[serde(default, alias = "secretKey", skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Session credentials file for the `file` strategy
    #[serde(
        default,
        alias = "fileSessionCredentials",
        alias = "fileSessionCredentialsPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_session_credentials: Option<PathBuf>,
}

/// `s3.credential.*`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CredentialSettings {
    /// Active strategy tag; unset means anonymous
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Shared credentials file settings for the `profile` strategy
    #[serde(default)]
    pub profile: ProfileSettings,

    /// Instance metadata service settings for the `instance-profile` strategy
    #[serde(default)]
    pub instance_metadata: InstanceMetadataSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ProfileSettings {
    /// Profile name (falls back to `AWS_PROFILE`, then `default`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Credentials file (falls back to `AWS_SHARED_CREDENTIALS_FILE`, then `~/.aws/credentials`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct InstanceMetadataSettings {
    /// Base URL of the instance metadata service
    #[serde(default = "default_metadata_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_metadata_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_metadata_endpoint() -> String {
    "http://169.254.169.254".to_string()
}

const fn default_metadata_timeout_ms() -> u64 {
    1000
}

impl Default for InstanceMetadataSettings {
    fn default() -> Self {
        Self {
            endpoint: default_metadata_endpoint(),
            timeout_ms: default_metadata_timeout_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
