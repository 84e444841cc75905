//! Custodian - object-storage credential resolution
//!
//! Custodian selects one of several named credential strategies at startup,
//! constructs the chosen provider lazily and exactly once, wraps it in a
//! credential chain, and builds a session-aware or static storage client
//! from whatever the chain yields.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential values, configuration models, errors, provider port
//! - **Adapters** (`adapters`): one credentials provider per strategy
//! - **Service Layer** (`services`): lazy singleton, strategy registry, chain, client factory
//! - **Application Layer** (`application`): configuration-driven bootstrap
//! - **Infrastructure Layer** (`infrastructure`): figment configuration and tracing setup
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use custodian::{CredentialBootstrap, ConfigLoader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let resolved = CredentialBootstrap::from_config(&config.s3)?;
//!     let client = resolved.build_client().await?;
//!     println!("authenticated: {}", client.is_authenticated());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{CredentialBootstrap, ResolvedCredentials};
pub use domain::errors::{CredentialsError, CredentialsResult, RegistryError};
pub use domain::models::{Config, Credentials, CredentialsConfig, CredentialsKind};
pub use domain::ports::CredentialsProvider;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ClientAuth, ClientFactory, CredentialChain, StorageClient, StrategyRegistry};
