//! Credential provider adapters, one per strategy.

pub mod anonymous;
pub mod config_driven;
pub mod environment;
pub mod file_session;
pub mod instance_profile;
pub mod profile;
pub mod sdk;
pub mod system_properties;

pub use anonymous::AnonymousProvider;
pub use config_driven::ConfigDrivenProvider;
pub use environment::EnvironmentVariableProvider;
pub use file_session::FileSessionProvider;
pub use instance_profile::InstanceProfileProvider;
pub use profile::ProfileProvider;
pub use sdk::from_sdk_credentials;
pub use system_properties::{SystemProperties, SystemPropertiesProvider};
