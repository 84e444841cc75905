//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Credential pair and logging validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
