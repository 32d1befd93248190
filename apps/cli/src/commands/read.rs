use anyhow::Result;
use clap::Args;
use gigo_provider::prelude::*;
use serde_json::json;
use tracing::debug;

use super::qualify;
use crate::core::error::CliError;

/// Environment variables that feed the workspace data source.
const WORKSPACE_ENV_PREFIX: &str = "GIGO_WORKSPACE_";

#[derive(Args, Debug)]
pub struct ReadCommand {
    /// Data source to read (`provisioner` or `workspace`)
    pub data_source: String,

    /// Base URL of the Gigo deployment provisioning the workspace
    #[arg(long, env = "GIGO_URL")]
    pub url: Option<String>,
}

impl ReadCommand {
    pub fn execute(&self) -> Result<()> {
        let mut provider = Provider::new();
        if let Some(url) = &self.url {
            provider
                .configure(&json!({ "url": url }))
                .map_err(CliError::from)?;
        }

        let name = qualify(&self.data_source);
        let env = ProcessEnvironment::with_prefix(WORKSPACE_ENV_PREFIX).snapshot();
        debug!(data_source = %name, vars = env.len(), "reading data source");

        let state = provider
            .read(&name, &env)
            .map_err(CliError::from)?;

        println!(
            "{}",
            serde_json::to_string_pretty(&state).map_err(CliError::from)?
        );
        Ok(())
    }
}
