use thiserror::Error;

/// Main error type for the lookup engine
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog source errors
    #[error("Source '{source_name}' error: {message}")]
    Source { source_name: String, message: String },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No results found
    #[error("No results found for query: {0}")]
    NoResults(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl LookupError {
    pub(crate) fn source_failure(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl From<String> for LookupError {
    fn from(s: String) -> Self {
        LookupError::Other(s)
    }
}

impl From<&str> for LookupError {
    fn from(s: &str) -> Self {
        LookupError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LookupError>;
