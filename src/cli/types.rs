//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "custodian")]
#[command(about = "Custodian - object-storage credential resolution", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .custodian/config.yaml + .custodian/local.yaml)
    #[arg(short, long, global = true, env = "CUSTODIAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Set a process property, e.g. -D aws.accessKeyId=AK (repeatable)
    #[arg(short = 'D', long = "property", value_name = "KEY=VALUE", global = true)]
    pub properties: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials through the configured strategy and build a client
    Resolve {
        /// Refresh the provider before resolving
        #[arg(long)]
        refresh: bool,
    },

    /// List credential strategies
    Strategies,

    /// Show the effective configuration with secrets masked
    Config,
}
