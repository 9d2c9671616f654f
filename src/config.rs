// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DictionaryError, Result};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CULTURAL_DICTIONARY";
const SEARCH_KEY_VAR: &str = "SERPLY_API_KEY";
const GENERATION_KEY_VAR: &str = "TOGETHER_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub generation: GenerationConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Appended to every query to bias hits toward the cultural domain.
    pub domain_keyword: Option<String>,
    pub proxy_location: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub on_generation_failure: GenerationFailurePolicy,
    pub deduplicate_terms: bool,
    pub citation_style: CitationStyle,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub format: OutputFormat,
}

/// What happens to a retrieved term whose definition could not be generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationFailurePolicy {
    /// Drop the term from the output, same as a retrieval failure.
    #[default]
    Skip,
    /// Keep the term and its sources with a fixed placeholder definition.
    Placeholder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationStyle {
    #[default]
    Structured,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Docx,
    Markdown,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.serply.io".to_string(),
            api_key: None,
            domain_keyword: Some("cultura maya".to_string()),
            proxy_location: "US".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.together.xyz".to_string(),
            api_key: None,
            model: "mistralai/Mixtral-8x7B-Instruct-v0.1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            on_generation_failure: GenerationFailurePolicy::Skip,
            deduplicate_terms: false,
            citation_style: CitationStyle::Structured,
            show_progress: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./output"),
            format: OutputFormat::Docx,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| DictionaryError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| DictionaryError::Config(e.to_string()))?;

        config.apply_secret_fallbacks();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        let mut config = Self::default();
        config.apply_secret_fallbacks();
        config
    }

    /// Fills unset API keys from the plain provider secret variables.
    fn apply_secret_fallbacks(&mut self) {
        if blank(&self.search.api_key) {
            self.search.api_key = std::env::var(SEARCH_KEY_VAR).ok();
        }
        if blank(&self.generation.api_key) {
            self.generation.api_key = std::env::var(GENERATION_KEY_VAR).ok();
        }
    }

    pub fn search_api_key(&self) -> Result<&str> {
        require_key(&self.search.api_key, "search.api_key", SEARCH_KEY_VAR)
    }

    pub fn generation_api_key(&self) -> Result<&str> {
        require_key(&self.generation.api_key, "generation.api_key", GENERATION_KEY_VAR)
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.search.base_url)
            .map_err(|e| DictionaryError::Config(format!("search.base_url: {}", e)))?;
        Validator::validate_url(&self.generation.base_url)
            .map_err(|e| DictionaryError::Config(format!("generation.base_url: {}", e)))?;

        if self.search.timeout_secs == 0 {
            return Err(DictionaryError::Config(
                "search.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.generation.timeout_secs == 0 {
            return Err(DictionaryError::Config(
                "generation.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.generation.model.trim().is_empty() {
            return Err(DictionaryError::Config(
                "generation.model must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn require_key<'a>(value: &'a Option<String>, key: &str, env_var: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DictionaryError::Config(format!(
            "{} is not set (configure it or export {})",
            key, env_var
        ))),
    }
}
