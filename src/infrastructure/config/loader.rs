use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("s3.access_key and s3.secret_key must be set together (only {0} is set)")]
    PartialCredentialsPair(&'static str),

    #[error("s3.credential.type cannot be empty when set")]
    EmptyCredentialType,

    #[error("Instance metadata endpoint cannot be empty")]
    EmptyMetadataEndpoint,

    #[error("Invalid instance metadata timeout_ms: {0}. Must be at least 1")]
    InvalidMetadataTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .custodian/config.yaml (project config)
    /// 3. .custodian/local.yaml (local overrides, optional)
    /// 4. Environment variables (CUSTODIAN_* prefix, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".custodian/config.yaml"))
            .merge(Yaml::file(".custodian/local.yaml"))
            .merge(Env::prefixed("CUSTODIAN_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring environment overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CUSTODIAN_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let s3 = &config.s3;

        // Credential pair is all-or-nothing
        match (&s3.access_key, &s3.secret_key) {
            (Some(_), None) => return Err(ConfigError::PartialCredentialsPair("access_key")),
            (None, Some(_)) => return Err(ConfigError::PartialCredentialsPair("secret_key")),
            _ => {}
        }

        if matches!(&s3.credential.kind, Some(kind) if kind.trim().is_empty()) {
            return Err(ConfigError::EmptyCredentialType);
        }

        let metadata = &s3.credential.instance_metadata;
        if metadata.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyMetadataEndpoint);
        }
        if metadata.timeout_ms == 0 {
            return Err(ConfigError::InvalidMetadataTimeout(metadata.timeout_ms));
        }

        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}
