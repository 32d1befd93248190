use domain::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    #[error("Data source {0} requires a configured provider (missing url)")]
    NotConfigured(String),

    #[error("Data source {data_source} rendered attribute {attribute:?} that does not match its schema")]
    SchemaMismatch {
        data_source: String,
        attribute: String,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
