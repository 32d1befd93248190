use domain::{WorkspaceFacts, WorkspaceFactsResolver};
use tracing::debug;

use crate::data_source::{DataSource, DataSourceState, ReadContext};
use crate::error::ProviderError;
use crate::provider::type_name;
use crate::schema::{AttributeMap, AttributeSchema, AttributeType, DataSourceSchema};

/// `gigo_workspace`: facts about the workspace build being provisioned.
#[derive(Debug, Default)]
pub struct WorkspaceDataSource;

impl WorkspaceDataSource {
    pub fn new() -> Self {
        Self
    }

    fn render(facts: WorkspaceFacts) -> DataSourceState {
        let attributes = AttributeMap::from([
            ("access_url".to_string(), facts.access_url.into()),
            ("access_port".to_string(), facts.access_port.into()),
            ("start_count".to_string(), facts.start_count.into()),
            ("transition".to_string(), facts.transition.into()),
            ("owner".to_string(), facts.owner.into()),
            ("owner_email".to_string(), facts.owner_email.into()),
            ("owner_id".to_string(), facts.owner_id.into()),
            ("disk".to_string(), facts.disk.into()),
            ("mem".to_string(), facts.mem.into()),
            ("cpu".to_string(), facts.cpu.into()),
            ("container".to_string(), facts.container.into()),
            ("id".to_string(), facts.id.clone().into()),
        ]);

        DataSourceState {
            id: facts.id,
            attributes,
        }
    }
}

impl DataSource for WorkspaceDataSource {
    fn name(&self) -> &'static str {
        "workspace"
    }

    fn schema(&self) -> DataSourceSchema {
        DataSourceSchema {
            name: type_name(self.name()),
            description: "Use this data source to get information for the active workspace build.",
            attributes: vec![
                AttributeSchema::computed(
                    "access_url",
                    AttributeType::String,
                    "The access URL of the Gigo deployment provisioning this workspace.",
                ),
                AttributeSchema::computed(
                    "access_port",
                    AttributeType::Int,
                    "The access port of the Gigo deployment provisioning this workspace.",
                ),
                AttributeSchema::computed(
                    "start_count",
                    AttributeType::Int,
                    r#"A computed count based on "transition" state. If "start", count will equal 1."#,
                ),
                AttributeSchema::computed(
                    "transition",
                    AttributeType::String,
                    r#"Either "start" or "stop". Use this to start/stop resources with "count"."#,
                ),
                AttributeSchema::computed(
                    "owner",
                    AttributeType::String,
                    "Username of the workspace owner.",
                ),
                AttributeSchema::computed(
                    "owner_email",
                    AttributeType::String,
                    "Email address of the workspace owner.",
                ),
                AttributeSchema::computed("owner_id", AttributeType::String, "ID of the workspace owner."),
                AttributeSchema::computed("disk", AttributeType::String, "Disk size of the volume mount."),
                AttributeSchema::computed("mem", AttributeType::String, "Memory size for the workspace."),
                AttributeSchema::computed("cpu", AttributeType::String, "CPU core count for the workspace."),
                AttributeSchema::computed(
                    "container",
                    AttributeType::String,
                    "Container that the workspace will be built in.",
                ),
                AttributeSchema::computed("id", AttributeType::String, "ID of the workspace."),
            ],
        }
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<DataSourceState, ProviderError> {
        let config = ctx
            .config
            .ok_or_else(|| ProviderError::NotConfigured(type_name(self.name())))?;

        let facts = WorkspaceFactsResolver::resolve(ctx.env, config)?;
        debug!(
            id = %facts.id,
            transition = %facts.transition,
            owner = %facts.owner,
            "resolved workspace facts"
        );

        Ok(Self::render(facts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeValue;
    use domain::workspace::facts::vars;
    use domain::{DeploymentConfig, EnvSnapshot, ResolveError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_matches_schema() {
        let env = EnvSnapshot::new().with(vars::ID, "ws-1");
        let config = DeploymentConfig::new("http://example.com:9000");
        let source = WorkspaceDataSource::new();

        let state = source
            .read(&ReadContext {
                config: Some(&config),
                env: &env,
            })
            .unwrap();

        source.schema().validate(&state.attributes).unwrap();
        assert_eq!(state.id, "ws-1");
        assert_eq!(state.attributes["id"], AttributeValue::from("ws-1"));
        assert_eq!(state.attributes["access_port"], AttributeValue::Int(9000));
        assert_eq!(state.attributes["start_count"], AttributeValue::Int(1));
    }

    #[test]
    fn test_read_requires_configuration() {
        let env = EnvSnapshot::new();
        let err = WorkspaceDataSource::new()
            .read(&ReadContext { config: None, env: &env })
            .unwrap_err();

        assert!(matches!(err, ProviderError::NotConfigured(name) if name == "gigo_workspace"));
    }

    #[test]
    fn test_invalid_port_is_propagated() {
        let env = EnvSnapshot::new();
        let config = DeploymentConfig::new("https://example.com:x");
        let err = WorkspaceDataSource::new()
            .read(&ReadContext {
                config: Some(&config),
                env: &env,
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Resolve(ResolveError::InvalidPort(port)) if port == "x"
        ));
    }
}
