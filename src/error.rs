// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Failure surfaced by a search or generation provider client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unparseable response body: {0}")]
    Parse(String),

    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("client configuration error: {0}")]
    Configuration(String),
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Retrieval failed for '{term}': {source}")]
    RetrievalFailed {
        term: String,
        #[source]
        source: ProviderError,
    },

    #[error("Generation failed for '{term}': {source}")]
    GenerationFailed {
        term: String,
        #[source]
        source: ProviderError,
    },

    #[error("Document rendering error: {0}")]
    Document(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DictionaryError {
    /// True for per-term failures the batch pipeline recovers from.
    pub fn is_term_failure(&self) -> bool {
        matches!(
            self,
            Self::RetrievalFailed { .. } | Self::GenerationFailed { .. }
        )
    }
}
