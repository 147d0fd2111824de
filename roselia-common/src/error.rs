use thiserror::Error;

/// Errors produced while loading a manifest resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManifestError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Why a URL did not yield a playable video identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VideoIdError {
    #[error("no video identifier found in {0:?}")]
    NoMatch(String),
    #[error("video identifier {id:?} has {len} characters, expected 11")]
    InvalidLength { id: String, len: usize },
}

impl From<serde_json::Error> for ManifestError {
    fn from(e: serde_json::Error) -> Self {
        ManifestError::Parse(e.to_string())
    }
}

/// Site configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
