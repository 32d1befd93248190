use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The access port (explicit or defaulted) is not a valid port number.
    #[error("couldn't parse port {0:?}")]
    InvalidPort(String),

    #[error("invalid access URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The host handed over a provider block that is not shaped like a deployment config.
    #[error("config was unexpected type {0:?}")]
    UnexpectedConfigType(String),
}
