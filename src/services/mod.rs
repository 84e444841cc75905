//! Credential resolution services: lazy construction, strategy selection,
//! chaining, and client construction.

pub mod client_factory;
pub mod credential_chain;
pub mod lazy_singleton;
pub mod strategy_registry;

pub use client_factory::{
    ClientAuth, ClientFactory, SessionCredentials, SessionCredentialsAdapter, StaticCredentials,
    StorageClient,
};
pub use credential_chain::CredentialChain;
pub use lazy_singleton::{provider_factory, LazyProvider, LazySingleton, ProviderFactory};
pub use strategy_registry::{effective_strategy, StrategyRegistry, BUILTIN_STRATEGIES, DEFAULT_STRATEGY};
