use domain::{DeploymentConfig, EnvSnapshot};
use serde::Serialize;

use crate::error::ProviderError;
use crate::schema::{AttributeMap, DataSourceSchema};

/// Inputs available to a data source read.
#[derive(Debug, Clone, Copy)]
pub struct ReadContext<'a> {
    /// `None` until the provider has been configured.
    pub config: Option<&'a DeploymentConfig>,
    pub env: &'a EnvSnapshot,
}

/// The rendered result of a read, as handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceState {
    pub id: String,
    pub attributes: AttributeMap,
}

/// A read-only data source exposed by the provider.
pub trait DataSource: Send + Sync {
    /// Type name without the provider prefix, e.g. `workspace`.
    fn name(&self) -> &'static str;

    fn schema(&self) -> DataSourceSchema;

    fn read(&self, ctx: &ReadContext<'_>) -> Result<DataSourceState, ProviderError>;
}
