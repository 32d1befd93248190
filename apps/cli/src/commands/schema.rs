use anyhow::Result;
use clap::Args;
use gigo_provider::application::Provider;

use super::qualify;
use crate::core::error::CliError;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Only print the schema of this data source
    pub data_source: Option<String>,
}

impl SchemaCommand {
    pub fn execute(&self) -> Result<()> {
        let provider = Provider::new();

        let rendered = match &self.data_source {
            Some(name) => {
                let schema = provider.schema(&qualify(name)).map_err(CliError::from)?;
                serde_json::to_string_pretty(&schema)
            }
            None => serde_json::to_string_pretty(&provider.schemas()),
        }
        .map_err(CliError::from)?;

        println!("{}", rendered);
        Ok(())
    }
}
