// file: src/pipeline/retriever.rs
// description: turns a term into grounding context and citation records
// reference: search provider response reduction

use crate::config::SearchConfig;
use crate::error::{DictionaryError, Result};
use crate::models::{Reference, SearchResponse, Term};
use crate::providers::SearchProvider;
use serde::Serialize;
use tracing::{debug, info};

/// Snippet context and ordered citations for one term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RetrievedContext {
    pub context: String,
    pub sources: Vec<Reference>,
}

impl RetrievedContext {
    /// Joins every non-blank snippet with newlines and keeps hit order for
    /// citations. Hits without a locator contribute context only.
    pub fn from_response(response: &SearchResponse) -> Self {
        let context = response
            .results
            .iter()
            .filter_map(|hit| hit.snippet_text())
            .collect::<Vec<_>>()
            .join("\n");

        let sources = response
            .results
            .iter()
            .filter_map(Reference::from_hit)
            .collect();

        Self { context, sources }
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.sources.is_empty()
    }
}

pub struct ContextRetriever<S> {
    provider: S,
    domain_keyword: Option<String>,
}

impl<S: SearchProvider> ContextRetriever<S> {
    pub fn new(provider: S, config: &SearchConfig) -> Self {
        let domain_keyword = config
            .domain_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Self {
            provider,
            domain_keyword,
        }
    }

    pub fn query_for(&self, term: &Term) -> String {
        match &self.domain_keyword {
            Some(keyword) => format!("{} {}", term, keyword),
            None => term.to_string(),
        }
    }

    /// One search per term. Zero hits is a valid, empty result; transport,
    /// status and parse failures become `RetrievalFailed`.
    pub async fn retrieve(&self, term: &Term) -> Result<RetrievedContext> {
        let query = self.query_for(term);
        debug!("Retrieving context via {} for query '{}'", self.provider.name(), query);

        let response = self.provider.search(&query).await.map_err(|source| {
            DictionaryError::RetrievalFailed {
                term: term.to_string(),
                source,
            }
        })?;

        let retrieved = RetrievedContext::from_response(&response);
        if response.results.is_empty() {
            info!("No search hits for '{}', continuing with empty context", term);
        } else {
            debug!(
                "Retrieved {} hits ({} citations, {} context chars) for '{}'",
                response.results.len(),
                retrieved.sources.len(),
                retrieved.context.chars().count(),
                term
            );
        }

        Ok(retrieved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::models::SearchHit;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct RecordingSearch {
        response: std::result::Result<SearchResponse, ProviderError>,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchProvider for RecordingSearch {
        async fn search(&self, query: &str) -> std::result::Result<SearchResponse, ProviderError> {
            self.queries.lock().unwrap().push(query.to_string());
            self.response.clone()
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn hit(snippet: Option<&str>, url: Option<&str>) -> SearchHit {
        SearchHit {
            snippet: snippet.map(str::to_string),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    fn build_retriever(
        response: std::result::Result<SearchResponse, ProviderError>,
        keyword: Option<&str>,
    ) -> ContextRetriever<RecordingSearch> {
        let config = SearchConfig {
            domain_keyword: keyword.map(str::to_string),
            ..SearchConfig::default()
        };
        ContextRetriever::new(
            RecordingSearch {
                response,
                queries: Mutex::new(Vec::new()),
            },
            &config,
        )
    }

    #[tokio::test]
    async fn test_two_hits_context_and_order() {
        let response = SearchResponse {
            results: vec![
                hit(Some("A is divine king"), Some("U1")),
                hit(Some("A is lord"), Some("U2")),
            ],
        };
        let retriever = build_retriever(Ok(response), None);

        let retrieved = retriever.retrieve(&Term::parse("Ajaw").unwrap()).await.unwrap();
        assert_eq!(retrieved.context, "A is divine king\nA is lord");
        let urls: Vec<&str> = retrieved.sources.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["U1", "U2"]);
    }

    #[tokio::test]
    async fn test_zero_hits_is_not_an_error() {
        let retriever = build_retriever(Ok(SearchResponse::default()), None);
        let retrieved = retriever
            .retrieve(&Term::parse("Unknown123").unwrap())
            .await
            .unwrap();
        assert!(retrieved.is_empty());
        assert_eq!(retrieved.context, "");
    }

    #[tokio::test]
    async fn test_snippetless_and_linkless_hits() {
        let response = SearchResponse {
            results: vec![
                hit(None, Some("U1")),
                hit(Some("only context"), None),
                hit(Some("both"), Some("U3")),
            ],
        };
        let retriever = build_retriever(Ok(response), None);

        let retrieved = retriever.retrieve(&Term::parse("Sol").unwrap()).await.unwrap();
        assert_eq!(retrieved.context, "only context\nboth");
        let urls: Vec<&str> = retrieved.sources.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["U1", "U3"]);
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_retrieval_failed() {
        let retriever = build_retriever(Err(ProviderError::Transport("timeout".to_string())), None);
        let err = retriever
            .retrieve(&Term::parse("Ajaw").unwrap())
            .await
            .unwrap_err();

        match err {
            DictionaryError::RetrievalFailed { term, source } => {
                assert_eq!(term, "Ajaw");
                assert_eq!(source, ProviderError::Transport("timeout".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_query_includes_term_and_keyword() {
        let retriever = build_retriever(Ok(SearchResponse::default()), Some(" cultura maya "));
        retriever.retrieve(&Term::parse("Ajaw").unwrap()).await.unwrap();

        let queries = retriever.provider.queries.lock().unwrap().clone();
        assert_eq!(queries, vec!["Ajaw cultura maya".to_string()]);

        let plain = build_retriever(Ok(SearchResponse::default()), Some(""));
        assert_eq!(plain.query_for(&Term::parse("Sol").unwrap()), "Sol");
    }
}
