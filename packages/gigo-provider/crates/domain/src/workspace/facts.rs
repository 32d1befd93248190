use serde::{Deserialize, Serialize};

/// Environment variables read while resolving a workspace build.
pub mod vars {
    pub const TRANSITION: &str = "GIGO_WORKSPACE_TRANSITION";
    pub const OWNER: &str = "GIGO_WORKSPACE_OWNER";
    pub const OWNER_EMAIL: &str = "GIGO_WORKSPACE_OWNER_EMAIL";
    pub const OWNER_ID: &str = "GIGO_WORKSPACE_OWNER_ID";
    pub const DISK: &str = "GIGO_WORKSPACE_DISK";
    pub const CPU: &str = "GIGO_WORKSPACE_CPU";
    pub const MEM: &str = "GIGO_WORKSPACE_MEM";
    pub const CONTAINER: &str = "GIGO_WORKSPACE_CONTAINER";
    pub const ID: &str = "GIGO_WORKSPACE_ID";
}

/// Fallbacks used when a variable is unset or empty.
pub mod defaults {
    pub const TRANSITION: &str = "start";
    pub const OWNER: &str = "default";
    pub const OWNER_EMAIL: &str = "";
    // 15GiB
    pub const DISK: &str = "15Gi";
    // 4 cores
    pub const CPU: &str = "4";
    // 4GB
    pub const MEM: &str = "4G";
    pub const CONTAINER: &str = "codercom/enterprise-base:ubuntu";

    pub const HTTP_PORT: &str = "80";
    pub const HTTPS_PORT: &str = "443";
}

/// The transition value that makes `start_count` equal 1.
pub const START_TRANSITION: &str = "start";

/// Everything known about the workspace build being provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFacts {
    pub id: String,
    /// `start` or `stop`, not validated.
    pub transition: String,
    pub start_count: u32,
    pub owner: String,
    pub owner_email: String,
    pub owner_id: String,
    pub disk: String,
    pub cpu: String,
    pub mem: String,
    pub container: String,
    pub access_url: String,
    pub access_port: i64,
}

impl WorkspaceFacts {
    /// Count for resources that should only exist while the workspace runs.
    pub fn start_count_for(transition: &str) -> u32 {
        u32::from(transition == START_TRANSITION)
    }

    pub fn is_starting(&self) -> bool {
        self.start_count == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_start_counts() {
        assert_eq!(WorkspaceFacts::start_count_for("start"), 1);
        assert_eq!(WorkspaceFacts::start_count_for("stop"), 0);
        assert_eq!(WorkspaceFacts::start_count_for("Start"), 0);
        assert_eq!(WorkspaceFacts::start_count_for("restart"), 0);
    }
}
