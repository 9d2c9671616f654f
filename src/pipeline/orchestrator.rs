// file: src/pipeline/orchestrator.rs
// description: coordinates retrieval, generation, assembly and document rendering
// reference: sequential per-term workflow with skip-and-continue failure handling

use crate::catalog::TermCatalog;
use crate::config::{Config, GenerationFailurePolicy};
use crate::document::{
    BATCH_FILE_STEM, DocumentBuilder, DocumentRenderer, GeneratedFile, renderer_for,
    single_file_stem,
};
use crate::error::{DictionaryError, Result};
use crate::models::{DictionaryEntry, Term};
use crate::pipeline::cancellation::CancellationToken;
use crate::pipeline::generator::DefinitionGenerator;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::pipeline::retriever::{ContextRetriever, RetrievedContext};
use crate::providers::{GenerationProvider, SearchProvider};
use serde::Serialize;
use tracing::{info, warn};

/// Definition kept for retrieved terms under the placeholder policy.
pub const PLACEHOLDER_DEFINITION: &str = "Definición no disponible.";

/// Lifecycle of one term: `Pending -> Retrieved -> Defined -> Assembled`,
/// or `Pending -> Skipped` / `Retrieved -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermState {
    Pending,
    Retrieved,
    Defined,
    Assembled,
    Skipped,
    Failed,
}

impl TermState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Assembled | Self::Skipped | Self::Failed)
    }
}

/// Final state of a term plus the notice reported for it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermOutcome {
    pub term: String,
    pub state: TermState,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub file: GeneratedFile,
    pub entries: Vec<DictionaryEntry>,
    pub outcomes: Vec<TermOutcome>,
    pub stats: PipelineStats,
    pub cancelled: bool,
}

impl BatchReport {
    pub fn notices(&self) -> impl Iterator<Item = &TermOutcome> {
        self.outcomes.iter().filter(|o| o.notice.is_some())
    }
}

#[derive(Debug, Clone)]
pub struct SingleReport {
    pub file: GeneratedFile,
    pub entry: DictionaryEntry,
    /// Set when the definition is the placeholder after a generation failure.
    pub notice: Option<String>,
}

pub struct BatchPipeline<S, G> {
    retriever: ContextRetriever<S>,
    generator: DefinitionGenerator<G>,
    builder: DocumentBuilder,
    renderer: Box<dyn DocumentRenderer>,
    on_generation_failure: GenerationFailurePolicy,
    show_progress: bool,
    cancellation: CancellationToken,
}

impl<S: SearchProvider, G: GenerationProvider> BatchPipeline<S, G> {
    pub fn new(config: &Config, search: S, generation: G) -> Self {
        Self {
            retriever: ContextRetriever::new(search, &config.search),
            generator: DefinitionGenerator::new(generation),
            builder: DocumentBuilder::new(config.pipeline.citation_style),
            renderer: renderer_for(config.output.format),
            on_generation_failure: config.pipeline.on_generation_failure,
            show_progress: config.pipeline.show_progress,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn DocumentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Token observed between terms; cancel it to stop after the current term.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Runs every catalog term in order and renders whatever was assembled.
    /// Per-term failures never abort the run.
    pub async fn generate_all(&self, catalog: &TermCatalog) -> Result<BatchReport> {
        info!("Starting batch generation for {} terms", catalog.len());

        let progress = ProgressTracker::new(catalog.len(), self.show_progress);
        let mut entries = Vec::with_capacity(catalog.len());
        let mut outcomes = Vec::with_capacity(catalog.len());
        let mut cancelled = false;

        for term in catalog.terms() {
            if self.cancellation.is_cancelled() {
                warn!(
                    "Batch cancelled after {} of {} terms",
                    outcomes.len(),
                    catalog.len()
                );
                cancelled = true;
                break;
            }

            progress.start_term(term.as_str());
            let (outcome, entry) = self.process_term(term).await;
            debug_assert!(outcome.state.is_terminal());

            match outcome.state {
                TermState::Assembled => {
                    progress.inc_assembled(entry.as_ref().map_or(0, |e| e.sources().len()))
                }
                TermState::Skipped => progress.inc_skipped(),
                _ => progress.inc_failed(),
            }

            entries.extend(entry);
            outcomes.push(outcome);
        }

        progress.finish();

        let document = self.builder.build_batch(&entries);
        let file = GeneratedFile::render(self.renderer.as_ref(), &document, BATCH_FILE_STEM)?;
        let stats = progress.get_stats();

        log_final_stats(&stats);

        Ok(BatchReport {
            file,
            entries,
            outcomes,
            stats,
            cancelled,
        })
    }

    /// Single-entry mode. Blank input is rejected before any network call;
    /// retrieval failures and (under `skip`) generation failures are returned.
    pub async fn generate_one(&self, raw_term: &str) -> Result<SingleReport> {
        let term = Term::parse(raw_term)?;
        let retrieved = self.retriever.retrieve(&term).await?;

        let (definition, notice) = match self.generator.generate(&term, &retrieved.context).await {
            Ok(definition) => (definition, None),
            Err(err) => match self.on_generation_failure {
                GenerationFailurePolicy::Skip => return Err(err),
                GenerationFailurePolicy::Placeholder => {
                    warn!("{}; using placeholder definition", err);
                    (PLACEHOLDER_DEFINITION.to_string(), Some(err.to_string()))
                }
            },
        };

        let entry = DictionaryEntry::assemble(&term, definition, retrieved.sources)?;
        let document = self.builder.build_single(&entry);
        let file = GeneratedFile::render(
            self.renderer.as_ref(),
            &document,
            &single_file_stem(term.as_str()),
        )?;

        Ok(SingleReport {
            file,
            entry,
            notice,
        })
    }

    /// Drives one term to a terminal state. The retrieve/generate pair is
    /// never interrupted, so an entry is either complete or absent.
    async fn process_term(&self, term: &Term) -> (TermOutcome, Option<DictionaryEntry>) {
        let mut state = TermState::Pending;

        let retrieved = match self.retriever.retrieve(term).await {
            Ok(retrieved) => {
                state = TermState::Retrieved;
                retrieved
            }
            Err(err) => {
                warn!("Skipping '{}' from {:?}: {}", term, state, err);
                return (outcome(term, TermState::Skipped, Some(&err)), None);
            }
        };

        let (definition, notice) = match self.generator.generate(term, &retrieved.context).await {
            Ok(definition) => (definition, None),
            Err(err) => match self.on_generation_failure {
                GenerationFailurePolicy::Skip => {
                    warn!("Dropping '{}' after {:?}: {}", term, state, err);
                    return (outcome(term, TermState::Failed, Some(&err)), None);
                }
                GenerationFailurePolicy::Placeholder => {
                    warn!("Placeholder definition for '{}': {}", term, err);
                    (PLACEHOLDER_DEFINITION.to_string(), Some(err))
                }
            },
        };
        state = TermState::Defined;

        match assemble(term, definition, retrieved) {
            Ok(entry) => {
                state = TermState::Assembled;
                (outcome(term, state, notice.as_ref()), Some(entry))
            }
            Err(err) => {
                warn!("Could not assemble '{}' from {:?}: {}", term, state, err);
                (outcome(term, TermState::Failed, Some(&err)), None)
            }
        }
    }
}

fn assemble(term: &Term, definition: String, retrieved: RetrievedContext) -> Result<DictionaryEntry> {
    DictionaryEntry::assemble(term, definition, retrieved.sources)
}

fn outcome(term: &Term, state: TermState, error: Option<&DictionaryError>) -> TermOutcome {
    TermOutcome {
        term: term.to_string(),
        state,
        notice: error.map(ToString::to_string),
    }
}

fn log_final_stats(stats: &PipelineStats) {
    info!("=== Batch Generation Summary ===");
    info!("Duration: {:.2} seconds", stats.duration_secs);
    info!("Terms in catalog: {}", stats.terms_total);
    info!("Entries assembled: {}", stats.terms_assembled);
    info!("Terms skipped (retrieval): {}", stats.terms_skipped);
    info!("Terms failed (generation): {}", stats.terms_failed);
    info!("Sources collected: {}", stats.sources_collected);
    info!("Success rate: {:.2}%", stats.success_rate());
    info!("Processing speed: {:.2} terms/sec", stats.terms_per_second());
    info!("================================");
}
