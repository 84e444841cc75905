pub mod config;
pub mod credentials;

pub use config::{
    Config, CredentialSettings, CredentialsConfig, InstanceMetadataSettings, LoggingConfig,
    ProfileSettings,
};
pub use credentials::{mask_secret, Credentials, CredentialsKind};
