//! Custodian CLI entry point.

use clap::Parser;

use custodian::cli::{self, Cli, Commands};
use custodian::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(err, cli.json),
    };

    if let Err(err) = cli::apply_properties(&cli) {
        cli::handle_error(err, cli.json);
    }

    let result = match cli.command {
        Commands::Resolve { refresh } => {
            cli::commands::resolve::execute(&config, refresh, cli.json).await
        }
        Commands::Strategies => cli::commands::strategies::execute(&config, cli.json),
        Commands::Config => cli::commands::config::execute(&config, cli.json),
    };

    if let Err(err) = result {
        cli::handle_error(err, cli.json);
    }
}
