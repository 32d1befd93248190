pub mod data_source;
pub mod error;
pub mod provider;
pub mod provisioner;
pub mod schema;
pub mod workspace;

pub use data_source::{DataSource, DataSourceState, ReadContext};
pub use error::ProviderError;
pub use provider::{type_name, Provider, PROVIDER_NAME};
pub use provisioner::ProvisionerDataSource;
pub use schema::{AttributeMap, AttributeSchema, AttributeType, AttributeValue, DataSourceSchema};
pub use workspace::WorkspaceDataSource;
