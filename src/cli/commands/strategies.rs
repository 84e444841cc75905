//! Implementation of the `custodian strategies` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::CredentialBootstrap;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
pub struct StrategiesOutput {
    pub active: String,
    pub strategies: Vec<String>,
}

impl CommandOutput for StrategiesOutput {
    fn to_human(&self) -> String {
        self.strategies
            .iter()
            .map(|tag| {
                if *tag == self.active {
                    format!("* {tag}")
                } else {
                    format!("  {tag}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let resolved = CredentialBootstrap::from_config(&config.s3)
        .context("Failed to select credential strategy")?;

    let output_data = StrategiesOutput {
        active: resolved.strategy().to_string(),
        strategies: resolved
            .registry()
            .tags()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    output(&output_data, json_mode);
    Ok(())
}
