pub mod read;
pub mod schema;

use gigo_provider::application::{type_name, PROVIDER_NAME};

/// Accepts both `workspace` and `gigo_workspace`.
pub fn qualify(name: &str) -> String {
    if name.starts_with(&format!("{PROVIDER_NAME}_")) {
        name.to_string()
    } else {
        type_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("workspace"), "gigo_workspace");
        assert_eq!(qualify("gigo_provisioner"), "gigo_provisioner");
    }
}
