// file: src/providers/serply.rs
// description: Serply scholar search client
// reference: https://serply.io/docs

use crate::config::SearchConfig;
use crate::error::ProviderError;
use crate::models::SearchResponse;
use crate::providers::{SearchProvider, build_http_client, status_error};
use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use tracing::debug;

pub struct SerplyClient {
    client: Client,
    base_url: String,
    api_key: String,
    proxy_location: String,
    user_agent: String,
}

impl SerplyClient {
    pub fn new(config: &SearchConfig, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            proxy_location: config.proxy_location.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    fn endpoint(&self, query: &str) -> String {
        format!(
            "{}/v1/scholar/q={}",
            self.base_url,
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        )
    }
}

#[async_trait]
impl SearchProvider for SerplyClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, ProviderError> {
        debug!("Requesting scholar search for '{}'", query);

        let response = self
            .client
            .get(self.endpoint(query))
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .header("X-Proxy-Location", &self.proxy_location)
            .header("X-User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("Serply request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Serply response: {}", e)))?;

        debug!("Serply returned {} hits", parsed.results.len());
        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "serply"
    }
}
