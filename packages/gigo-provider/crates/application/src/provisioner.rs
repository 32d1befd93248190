use domain::{HostFactsResolver, PlatformDetector, SystemInfo};
use uuid::Uuid;

use crate::data_source::{DataSource, DataSourceState, ReadContext};
use crate::error::ProviderError;
use crate::provider::type_name;
use crate::schema::{AttributeMap, AttributeSchema, AttributeType, DataSourceSchema};

/// `gigo_provisioner`: the OS and architecture of the machine running the provider.
pub struct ProvisionerDataSource<S = PlatformDetector> {
    resolver: HostFactsResolver<S>,
}

impl ProvisionerDataSource<PlatformDetector> {
    pub fn new() -> Self {
        Self::with_system(PlatformDetector)
    }
}

impl Default for ProvisionerDataSource<PlatformDetector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SystemInfo> ProvisionerDataSource<S> {
    pub fn with_system(system: S) -> Self {
        Self {
            resolver: HostFactsResolver::new(system),
        }
    }
}

impl<S: SystemInfo + Send + Sync> DataSource for ProvisionerDataSource<S> {
    fn name(&self) -> &'static str {
        "provisioner"
    }

    fn schema(&self) -> DataSourceSchema {
        DataSourceSchema {
            name: type_name(self.name()),
            description: "Use this data source to get information about the Gigo provisioner.",
            attributes: vec![
                AttributeSchema::computed(
                    "os",
                    AttributeType::String,
                    "The operating system of the host. This exposes `std::env::consts::OS`.",
                ),
                AttributeSchema::computed(
                    "arch",
                    AttributeType::String,
                    "The CPU architecture of the host. This exposes `std::env::consts::ARCH`.",
                ),
            ],
        }
    }

    fn read(&self, _ctx: &ReadContext<'_>) -> Result<DataSourceState, ProviderError> {
        let facts = self.resolver.resolve();

        let attributes = AttributeMap::from([
            ("os".to_string(), facts.os.into()),
            ("arch".to_string(), facts.arch.into()),
        ]);

        // Host facts carry no identity of their own.
        Ok(DataSourceState {
            id: Uuid::new_v4().to_string(),
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::EnvSnapshot;

    #[test]
    fn test_read_reports_ambient_platform() {
        let env = EnvSnapshot::new();
        let state = ProvisionerDataSource::new()
            .read(&ReadContext { config: None, env: &env })
            .unwrap();

        assert_eq!(state.attributes["os"].as_str(), Some(std::env::consts::OS));
        assert_eq!(state.attributes["arch"].as_str(), Some(std::env::consts::ARCH));
        assert!(Uuid::parse_str(&state.id).is_ok());
    }
}
