// file: src/pipeline/generator.rs
// description: prompt construction and definition generation
// reference: grounded dictionary-style completion with a stop marker

use crate::error::{DictionaryError, ProviderError, Result};
use crate::models::Term;
use crate::providers::{DEFINITION_SAMPLING, GenerationProvider, SamplingConfig};
use crate::utils::validation::Validator;
use tracing::debug;

pub struct DefinitionGenerator<G> {
    provider: G,
    sampling: SamplingConfig,
}

impl<G: GenerationProvider> DefinitionGenerator<G> {
    pub fn new(provider: G) -> Self {
        Self {
            provider,
            sampling: DEFINITION_SAMPLING,
        }
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    /// Embeds the context and term verbatim ahead of the instruction.
    pub fn build_prompt(term: &Term, context: &str) -> String {
        format!(
            "Contexto: {context}\n\n\
             Término: {term}\n\n\
             Proporciona una definición del término cultural '{term}' según la visión de la cultura Maya. \
             La definición debe ser más larga, detallada, e informativa, similar a una entrada de diccionario extendida. \
             Incluye referencias a fuentes específicas que traten este concepto.\n\n\
             Definición:"
        )
    }

    /// Returns the trimmed completion. A blank completion counts as a failure.
    pub async fn generate(&self, term: &Term, context: &str) -> Result<String> {
        let prompt = Self::build_prompt(term, context);
        debug!(
            "Generating definition via {} for '{}': {}",
            self.provider.name(),
            term,
            Validator::truncate_text(&prompt, 120)
        );

        let failed = |source| DictionaryError::GenerationFailed {
            term: term.to_string(),
            source,
        };

        let text = self
            .provider
            .complete(&prompt, &self.sampling)
            .await
            .map_err(failed)?;

        let definition = text.trim();
        if definition.is_empty() {
            return Err(failed(ProviderError::MissingField("text")));
        }

        Ok(definition.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedGeneration {
        reply: std::result::Result<String, ProviderError>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGeneration {
        fn new(reply: std::result::Result<String, ProviderError>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationProvider for CannedGeneration {
        async fn complete(
            &self,
            prompt: &str,
            sampling: &SamplingConfig,
        ) -> std::result::Result<String, ProviderError> {
            assert_eq!(sampling, &DEFINITION_SAMPLING);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    #[test]
    fn test_prompt_embeds_term_and_context() {
        let term = Term::parse("Ajaw").unwrap();
        let prompt = DefinitionGenerator::<CannedGeneration>::build_prompt(
            &term,
            "A is divine king\nA is lord",
        );

        assert!(prompt.starts_with("Contexto: A is divine king\nA is lord\n\nTérmino: Ajaw\n\n"));
        assert!(prompt.contains("del término cultural 'Ajaw' según la visión de la cultura Maya."));
        assert!(prompt.ends_with("\n\nDefinición:"));
    }

    #[test]
    fn test_prompt_with_empty_context() {
        let term = Term::parse("Unknown123").unwrap();
        let prompt = DefinitionGenerator::<CannedGeneration>::build_prompt(&term, "");
        assert!(prompt.starts_with("Contexto: \n\nTérmino: Unknown123"));
    }

    #[test]
    fn test_sampling_policy() {
        let generator = DefinitionGenerator::new(CannedGeneration::new(Ok(String::new())));
        let sampling = generator.sampling();
        assert_eq!(sampling.max_tokens, 2048);
        assert_eq!(sampling.top_k, 50);
        assert_eq!(sampling.stop, &["Término:"]);
    }

    #[tokio::test]
    async fn test_generate_trims() {
        let generator =
            DefinitionGenerator::new(CannedGeneration::new(Ok("\n  Ajaw denotes...  \n".to_string())));
        let definition = generator
            .generate(&Term::parse("Ajaw").unwrap(), "ctx")
            .await
            .unwrap();
        assert_eq!(definition, "Ajaw denotes...");
        assert_eq!(generator.provider.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_failure_and_blank() {
        let failing = DefinitionGenerator::new(CannedGeneration::new(Err(
            ProviderError::Parse("bad json".to_string()),
        )));
        let err = failing
            .generate(&Term::parse("Sol").unwrap(), "")
            .await
            .unwrap_err();
        assert!(matches!(err, DictionaryError::GenerationFailed { .. }));

        let blank = DefinitionGenerator::new(CannedGeneration::new(Ok("   ".to_string())));
        let err = blank
            .generate(&Term::parse("Sol").unwrap(), "")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::GenerationFailed {
                source: ProviderError::MissingField("text"),
                ..
            }
        ));
    }
}
