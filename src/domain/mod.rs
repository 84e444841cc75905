//! Domain layer for credential resolution
//!
//! This module contains the credential value types, configuration models,
//! error taxonomy, and the provider port every strategy implements.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CredentialsError, CredentialsResult, RegistryError};
