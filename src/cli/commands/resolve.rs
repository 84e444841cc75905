//! Implementation of the `custodian resolve` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::CredentialBootstrap;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{mask_secret, Config, CredentialsKind};
use crate::domain::ports::CredentialsProvider;
use crate::services::ClientAuth;

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub strategy: String,
    pub client: CredentialsKind,
    pub authenticated: bool,
    pub access_key: String,
    pub session_token: bool,
    pub refreshed: bool,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Strategy:       {}", self.strategy),
            format!("Client:         {}", self.client),
        ];
        if self.authenticated {
            lines.push(format!("Access key:     {}", self.access_key));
            lines.push(format!(
                "Session token:  {}",
                if self.session_token { "present" } else { "none" }
            ));
        } else {
            lines.push("Access key:     (unauthenticated)".to_string());
        }
        if self.refreshed {
            lines.push("Provider refreshed before resolution".to_string());
        }
        lines.join("\n")
    }
}

pub async fn execute(config: &Config, refresh: bool, json_mode: bool) -> Result<()> {
    let resolved = CredentialBootstrap::from_config(&config.s3)
        .context("Failed to select credential strategy")?;

    if refresh {
        resolved
            .chain()
            .refresh()
            .await
            .with_context(|| format!("Failed to refresh '{}' credentials", resolved.strategy()))?;
    }

    let client = resolved
        .build_client()
        .await
        .context("Failed to build storage client")?;

    let output_data = ResolveOutput {
        strategy: resolved.strategy().to_string(),
        client: client.kind(),
        authenticated: client.is_authenticated(),
        access_key: mask_secret(client.access_key_id()),
        session_token: matches!(client.auth(), ClientAuth::Session(_)),
        refreshed: refresh,
    };
    output(&output_data, json_mode);
    Ok(())
}
