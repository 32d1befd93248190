use std::collections::HashMap;

/// An immutable snapshot of environment variables, injected into resolvers.
///
/// Lookups treat an empty value exactly like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and embedding hosts.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Returns the value of `key` if it is set to something non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Something that can capture the environment a resolution runs in.
pub trait EnvironmentSource {
    fn snapshot(&self) -> EnvSnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_reads_as_absent() {
        let env = EnvSnapshot::new().with("SET", "value").with("EMPTY", "");

        assert_eq!(env.get("SET"), Some("value"));
        assert_eq!(env.get("EMPTY"), None);
        assert_eq!(env.get("MISSING"), None);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_collects_from_pairs() {
        let env: EnvSnapshot = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("B"), Some("2"));
        assert!(!env.is_empty());
    }
}
