use thiserror::Error;

/// Top-level error type for the Synapse workspace.
///
/// The domain functions are total, so this only covers the edges: loading
/// configuration, serializing payloads, and binding the HTTP server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynapseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid window filter: {0}")]
    InvalidFilter(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SynapseError {
    fn from(err: toml::de::Error) -> Self {
        SynapseError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SynapseError {
    fn from(err: serde_json::Error) -> Self {
        SynapseError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Synapse operations.
pub type Result<T> = std::result::Result<T, SynapseError>;
