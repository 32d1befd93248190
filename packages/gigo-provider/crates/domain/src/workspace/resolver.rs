use tracing::debug;
use uuid::Uuid;

use super::facts::{defaults, vars, WorkspaceFacts};
use crate::config::{is_digits, DeploymentConfig};
use crate::error::ResolveError;
use crate::ports::environment::EnvSnapshot;

/// Resolves [`WorkspaceFacts`] from an environment snapshot and the deployment config.
///
/// Missing metadata never blocks provisioning: every variable has a default,
/// and the only failure is a base URL whose port cannot be parsed.
pub struct WorkspaceFactsResolver;

impl WorkspaceFactsResolver {
    pub fn resolve(
        env: &EnvSnapshot,
        config: &DeploymentConfig,
    ) -> Result<WorkspaceFacts, ResolveError> {
        let scheme = config.scheme()?;
        let access_port = Self::access_port(&scheme, config.explicit_port())?;
        debug!(url = config.base_url(), port = access_port, "derived access port");

        let transition = lookup_or(env, vars::TRANSITION, defaults::TRANSITION);
        let start_count = WorkspaceFacts::start_count_for(&transition);

        // A missing owner id is pinned to the nil UUID, a missing workspace id
        // is freshly generated on every call.
        let owner_id = lookup_or_else(env, vars::OWNER_ID, || Uuid::nil().to_string());
        let id = lookup_or_else(env, vars::ID, || Uuid::new_v4().to_string());

        Ok(WorkspaceFacts {
            id,
            transition,
            start_count,
            owner: lookup_or(env, vars::OWNER, defaults::OWNER),
            owner_email: lookup_or(env, vars::OWNER_EMAIL, defaults::OWNER_EMAIL),
            owner_id,
            disk: lookup_or(env, vars::DISK, defaults::DISK),
            cpu: lookup_or(env, vars::CPU, defaults::CPU),
            mem: lookup_or(env, vars::MEM, defaults::MEM),
            container: lookup_or(env, vars::CONTAINER, defaults::CONTAINER),
            access_url: config.base_url().to_string(),
            access_port,
        })
    }

    /// The explicit port as written, or the HTTP/HTTPS default for `scheme`.
    ///
    /// Only the exact scheme `https` maps to 443; everything else falls back to 80.
    pub fn access_port(scheme: &str, explicit: Option<&str>) -> Result<i64, ResolveError> {
        let raw = match explicit {
            Some(port) => port,
            None if scheme == "https" => defaults::HTTPS_PORT,
            None => defaults::HTTP_PORT,
        };

        if !is_digits(raw) {
            return Err(ResolveError::InvalidPort(raw.to_string()));
        }
        raw.parse()
            .map_err(|_| ResolveError::InvalidPort(raw.to_string()))
    }
}

fn lookup_or(env: &EnvSnapshot, key: &str, default: &str) -> String {
    lookup_or_else(env, key, || default.to_string())
}

fn lookup_or_else(env: &EnvSnapshot, key: &str, default: impl FnOnce() -> String) -> String {
    match env.get(key) {
        Some(value) => value.to_string(),
        None => {
            debug!(var = key, "variable unset, using default");
            default()
        }
    }
}
