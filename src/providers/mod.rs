// file: src/providers/mod.rs
// description: provider client contracts for search and text generation
// reference: LLM provider trait with a shared request envelope

pub mod serply;
pub mod together;

pub use serply::SerplyClient;
pub use together::TogetherClient;

use crate::error::ProviderError;
use crate::models::SearchResponse;
use async_trait::async_trait;

/// Search backend returning raw hits for a query.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, ProviderError>;

    fn name(&self) -> &'static str;
}

/// Text-generation backend completing a prompt.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, ProviderError>;

    fn name(&self) -> &'static str;
}

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    pub stop: &'static [&'static str],
}

/// Stop marker that keeps the model from starting a second entry.
pub const ENTRY_STOP_MARKER: &str = "Término:";

/// Fixed policy for dictionary definitions.
pub const DEFINITION_SAMPLING: SamplingConfig = SamplingConfig {
    max_tokens: 2048,
    temperature: 0.7,
    top_p: 0.7,
    top_k: 50,
    repetition_penalty: 1.0,
    stop: &[ENTRY_STOP_MARKER],
};

/// Reads the body of a failed response for the error message.
pub(crate) async fn status_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<body unavailable>".to_string());
    ProviderError::Status { status, body }
}

pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ProviderError::Configuration(format!("failed to build HTTP client: {}", e)))
}
