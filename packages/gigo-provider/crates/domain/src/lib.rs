pub mod config;
pub mod error;
pub mod ports;
pub mod system;
pub mod workspace;

pub use config::DeploymentConfig;
pub use error::ResolveError;
pub use ports::environment::{EnvSnapshot, EnvironmentSource};
pub use ports::system::SystemInfo;
pub use system::{HostFacts, HostFactsResolver, PlatformDetector};
pub use workspace::{WorkspaceFacts, WorkspaceFactsResolver};
