use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ports::system::SystemInfo;

/// Facts about the machine running the provisioner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostFacts {
    /// Operating system name, e.g. `linux`, `macos`, `windows`.
    pub os: String,
    /// CPU architecture, e.g. `x86_64`, `aarch64`.
    pub arch: String,
}

impl fmt::Display for HostFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// The platform the current binary was built for and is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDetector;

impl SystemInfo for PlatformDetector {
    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn arch(&self) -> String {
        std::env::consts::ARCH.to_string()
    }
}

/// Resolves [`HostFacts`] from a platform query.
#[derive(Debug, Clone, Default)]
pub struct HostFactsResolver<S = PlatformDetector> {
    system: S,
}

impl HostFactsResolver<PlatformDetector> {
    /// Resolves the facts of the running platform.
    pub fn detect() -> HostFacts {
        HostFactsResolver::new(PlatformDetector).resolve()
    }
}

impl<S: SystemInfo> HostFactsResolver<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }

    pub fn resolve(&self) -> HostFacts {
        HostFacts {
            os: self.system.os_name(),
            arch: self.system.arch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSystem;

    impl SystemInfo for FixedSystem {
        fn os_name(&self) -> String {
            "freebsd".to_string()
        }
        fn arch(&self) -> String {
            "riscv64".to_string()
        }
    }

    #[test]
    fn test_platform_detection() {
        let facts = HostFactsResolver::detect();

        assert_eq!(facts.os, std::env::consts::OS);
        assert_eq!(facts.arch, std::env::consts::ARCH);
        assert!(!facts.os.is_empty());
    }

    #[test]
    fn test_resolve_uses_injected_system() {
        let facts = HostFactsResolver::new(FixedSystem).resolve();

        assert_eq!(facts.os, "freebsd");
        assert_eq!(facts.arch, "riscv64");
        assert_eq!(facts.to_string(), "freebsd/riscv64");
    }
}
