use gigo_provider::application::ProviderError;
use gigo_provider::domain::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) | CliError::Provider(ProviderError::NotConfigured(_)) => Some(
                "Pass --url or set GIGO_URL to the base URL of the Gigo deployment.".to_string(),
            ),
            CliError::Provider(ProviderError::Resolve(ResolveError::InvalidPort(_))) => {
                Some("The port of the deployment URL must be a non-negative integer.".to_string())
            }
            CliError::Provider(ProviderError::UnknownDataSource(_)) => {
                Some("Run `gigo-provider schema` to list the available data sources.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let not_configured = CliError::from(ProviderError::NotConfigured("gigo_workspace".into()));
        assert!(not_configured.suggestion().unwrap().contains("GIGO_URL"));

        let bad_port = CliError::from(ProviderError::from(ResolveError::InvalidPort("x".into())));
        assert!(bad_port.suggestion().unwrap().contains("port"));
        assert_eq!(bad_port.to_string(), r#"couldn't parse port "x""#);

        let bad_url = CliError::from(ProviderError::from(ResolveError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        }));
        assert!(bad_url.suggestion().is_none());
    }
}
