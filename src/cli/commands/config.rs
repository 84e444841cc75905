//! Implementation of the `custodian config` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{mask_secret, Config};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput {
    pub config: Config,
}

impl ConfigOutput {
    /// Copy of `config` with secrets masked.
    pub fn masked(config: &Config) -> Self {
        let mut config = config.clone();
        config.s3.access_key = config.s3.access_key.as_deref().map(mask_secret);
        config.s3.secret_key = config.s3.secret_key.as_ref().map(|_| "****".to_string());
        Self { config }
    }
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(&ConfigOutput::masked(config), json_mode);
    Ok(())
}
