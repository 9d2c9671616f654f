// file: src/providers/together.rs
// description: Together inference client for dictionary definition generation
// reference: https://docs.together.ai/reference/inference

use crate::config::GenerationConfig;
use crate::error::ProviderError;
use crate::providers::{GenerationProvider, SamplingConfig, build_http_client, status_error};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repetition_penalty: f32,
    stop: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    output: Option<InferenceOutput>,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    #[serde(default)]
    choices: Vec<InferenceChoice>,
}

#[derive(Debug, Deserialize)]
struct InferenceChoice {
    text: Option<String>,
}

impl InferenceResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        let output = self.output.ok_or(ProviderError::MissingField("output"))?;
        let choice = output
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingField("output.choices"))?;
        choice.text.ok_or(ProviderError::MissingField("output.choices[0].text"))
    }
}

pub struct TogetherClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl TogetherClient {
    pub fn new(config: &GenerationConfig, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_http_client(config.timeout_secs)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl GenerationProvider for TogetherClient {
    async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/inference", self.base_url);

        let request = InferenceRequest {
            model: &self.model,
            prompt,
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            top_k: sampling.top_k,
            repetition_penalty: sampling.repetition_penalty,
            stop: sampling.stop,
        };

        debug!(
            "Requesting completion from {} for {} chars of prompt",
            self.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("Together request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Together response: {}", e)))?;

        let text = parsed.into_text()?;
        debug!("Received completion of {} chars", text.chars().count());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "together"
    }
}
