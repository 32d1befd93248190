use std::collections::BTreeMap;

use domain::{DeploymentConfig, EnvSnapshot, ResolveError};
use serde_json::Value;
use tracing::info;

use crate::data_source::{DataSource, DataSourceState, ReadContext};
use crate::error::ProviderError;
use crate::provisioner::ProvisionerDataSource;
use crate::schema::DataSourceSchema;
use crate::workspace::WorkspaceDataSource;

pub const PROVIDER_NAME: &str = "gigo";

/// Full type name of a data source, e.g. `gigo_workspace`.
pub fn type_name(name: &str) -> String {
    format!("{PROVIDER_NAME}_{name}")
}

/// The host-facing provider: a registry of data sources plus the deployment
/// config handed over at configure time.
pub struct Provider {
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
    config: Option<DeploymentConfig>,
}

impl Provider {
    /// A provider exposing `gigo_provisioner` and `gigo_workspace`.
    pub fn new() -> Self {
        Self::empty()
            .with_data_source(ProvisionerDataSource::new())
            .with_data_source(WorkspaceDataSource::new())
    }

    pub fn empty() -> Self {
        Self {
            data_sources: BTreeMap::new(),
            config: None,
        }
    }

    pub fn with_data_source(mut self, data_source: impl DataSource + 'static) -> Self {
        self.data_sources
            .insert(type_name(data_source.name()), Box::new(data_source));
        self
    }

    /// Accepts the host's provider block.
    ///
    /// The block must be an object with a string `url`; anything else is
    /// rejected as [`ResolveError::UnexpectedConfigType`].
    pub fn configure(&mut self, raw: &Value) -> Result<&DeploymentConfig, ProviderError> {
        let config = match raw {
            Value::Object(_) => serde_json::from_value::<DeploymentConfig>(raw.clone())
                .map_err(|e| ResolveError::UnexpectedConfigType(format!("object ({e})")))?,
            other => {
                return Err(ResolveError::UnexpectedConfigType(kind(other).to_string()).into())
            }
        };

        info!(url = config.base_url(), "provider configured");
        Ok(self.config.insert(config))
    }

    pub fn config(&self) -> Option<&DeploymentConfig> {
        self.config.as_ref()
    }

    /// Reads the data source registered as `name` (full type name).
    pub fn read(&self, name: &str, env: &EnvSnapshot) -> Result<DataSourceState, ProviderError> {
        let data_source = self
            .data_sources
            .get(name)
            .ok_or_else(|| ProviderError::UnknownDataSource(name.to_string()))?;

        let ctx = ReadContext {
            config: self.config.as_ref(),
            env,
        };
        let state = data_source.read(&ctx)?;
        data_source.schema().validate(&state.attributes)?;

        info!(data_source = name, id = %state.id, "read data source");
        Ok(state)
    }

    pub fn schema(&self, name: &str) -> Result<DataSourceSchema, ProviderError> {
        self.data_sources
            .get(name)
            .map(|data_source| data_source.schema())
            .ok_or_else(|| ProviderError::UnknownDataSource(name.to_string()))
    }

    /// Every data source schema, ordered by type name.
    pub fn schemas(&self) -> Vec<DataSourceSchema> {
        self.data_sources.values().map(|ds| ds.schema()).collect()
    }

    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
