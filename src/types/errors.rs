//! Error types for lexideck.

use thiserror::Error;

/// Default result type for lexideck.
pub type LexiResult<T> = Result<T, LexiError>;

/// Everything that can go wrong while serving cards.
#[derive(Error, Debug)]
pub enum LexiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection or DNS failure while talking to the dictionary service.
    #[error("Network error fetching '{0}': {1}")]
    Network(String, String),

    /// The dictionary service did not answer within the deadline.
    #[error("Timed out fetching '{0}'")]
    Timeout(String),

    /// Non-2xx status, non-JSON body, or a payload without the expected shape.
    #[error("Invalid response for '{0}': {1}")]
    InvalidResponse(String, String),

    /// A batch produced zero usable entries.
    #[error("No entries available: {0}")]
    EmptyResult(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LexiError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid-response error for `word`.
    pub fn invalid_response(word: &str, reason: impl Into<String>) -> Self {
        Self::InvalidResponse(word.to_string(), reason.into())
    }

    /// True for the errors raised by the external dictionary layer.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Network(..) | Self::Timeout(_) | Self::InvalidResponse(..)
        )
    }
}
