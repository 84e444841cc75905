//! Adapters for external credential sources.

pub mod credentials;
