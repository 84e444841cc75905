//! Application layer: startup wiring of the credential subsystem.

pub mod credential_bootstrap;

pub use credential_bootstrap::{CredentialBootstrap, ResolvedCredentials};
