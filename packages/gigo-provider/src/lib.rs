//! # Gigo provider
//!
//! Read-only facts for infrastructure configurations provisioning Gigo workspaces.
//!
//! *   **`domain`**: fact records and the resolvers that compute them from an
//!     injected environment snapshot and the deployment config.
//! *   **`infrastructure`**: adapters that capture the real process environment.
//! *   **`application`**: the `gigo_provisioner` and `gigo_workspace` data sources,
//!     their attribute schemas and the provider registry a host talks to.
//!
//! ```rust,no_run
//! use gigo_provider::prelude::*;
//!
//! let mut provider = Provider::new();
//! provider.configure(&serde_json::json!({ "url": "https://gigo.dev" }))?;
//!
//! let env = ProcessEnvironment::with_prefix("GIGO_WORKSPACE_").snapshot();
//! let state = provider.read("gigo_workspace", &env)?;
//! println!("{}", state.id);
//! # Ok::<(), ProviderError>(())
//! ```

pub use application;
pub use domain;
pub use infrastructure;

pub mod prelude {
    pub use application::{DataSourceState, Provider, ProviderError};
    pub use domain::{DeploymentConfig, EnvSnapshot, EnvironmentSource, ResolveError};
    pub use infrastructure::ProcessEnvironment;
}
