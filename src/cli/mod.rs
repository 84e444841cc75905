//! Command-line interface for Custodian.

pub mod commands;
pub mod output;
pub mod types;

use std::process;

use anyhow::{Context, Result};

use crate::adapters::credentials::SystemProperties;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::{Cli, Commands};

/// Load configuration from `--config` or the project-local hierarchy.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Copy `-D key=value` flags into the process-wide properties.
pub fn apply_properties(cli: &Cli) -> Result<()> {
    let properties = SystemProperties::global();
    for assignment in &cli.properties {
        properties
            .set_assignment(assignment)
            .map_err(anyhow::Error::msg)
            .context("Invalid --property flag")?;
    }
    Ok(())
}

/// Print an error (JSON or human) and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    process::exit(1);
}
