use domain::ports::environment::{EnvSnapshot, EnvironmentSource};
use tracing::{debug, warn};

/// Captures the environment inherited by the current process.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    prefix: Option<String>,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only capture variables whose name starts with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn wanted(&self, key: &str) -> bool {
        self.prefix
            .as_deref()
            .map_or(true, |prefix| key.starts_with(prefix))
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn snapshot(&self) -> EnvSnapshot {
        let snapshot: EnvSnapshot = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(_)) => {
                    warn!(var = %key, "skipping variable with non UTF-8 value");
                    None
                }
                _ => None,
            })
            .filter(|(key, _)| self.wanted(key))
            .collect();

        debug!(count = snapshot.len(), prefix = ?self.prefix, "captured process environment");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reads_process_environment() {
        std::env::set_var("GIGO_INFRA_TEST_SNAPSHOT", "captured");

        let snapshot = ProcessEnvironment::new().snapshot();
        assert_eq!(snapshot.get("GIGO_INFRA_TEST_SNAPSHOT"), Some("captured"));
    }

    #[test]
    fn test_prefix_filters_variables() {
        std::env::set_var("GIGO_INFRA_TEST_PREFIX", "kept");
        std::env::set_var("OTHER_INFRA_TEST_PREFIX", "dropped");

        let snapshot = ProcessEnvironment::with_prefix("GIGO_INFRA_TEST_").snapshot();
        assert_eq!(snapshot.get("GIGO_INFRA_TEST_PREFIX"), Some("kept"));
        assert_eq!(snapshot.get("OTHER_INFRA_TEST_PREFIX"), None);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_changes() {
        std::env::set_var("GIGO_INFRA_TEST_DETACHED", "before");
        let snapshot = ProcessEnvironment::with_prefix("GIGO_INFRA_TEST_DETACHED").snapshot();
        std::env::set_var("GIGO_INFRA_TEST_DETACHED", "after");

        assert_eq!(snapshot.get("GIGO_INFRA_TEST_DETACHED"), Some("before"));
    }
}
