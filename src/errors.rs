use thiserror::Error;

/// Error type for fallible crate operations (configuration and terminal IO).
///
/// Missing required fields are never surfaced through this type: they are a
/// blocked-transition outcome of the wizard, not an error.
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
