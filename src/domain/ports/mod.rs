//! Port trait definitions (Hexagonal Architecture)
//!
//! - CredentialsProvider: produce and refresh credentials for one strategy
//!
//! Adapters under `crate::adapters::credentials` implement these contracts so
//! the services layer never depends on a concrete credential source.

pub mod credentials_provider;

pub use credentials_provider::CredentialsProvider;
