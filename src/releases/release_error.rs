use thiserror::Error;

/// Why the latest release could not be fetched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("GitHub returned HTTP {0}")]
    Status(u16),
    #[error("JSON parse error: {0}")]
    Decode(String),
    #[error("Invalid URL: {0}")]
    Url(String),
}
