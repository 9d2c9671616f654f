// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod cancellation;
pub mod generator;
pub mod orchestrator;
pub mod progress;
pub mod retriever;

pub use cancellation::CancellationToken;
pub use generator::DefinitionGenerator;
pub use orchestrator::{
    BatchPipeline, BatchReport, PLACEHOLDER_DEFINITION, SingleReport, TermOutcome, TermState,
};
pub use progress::{PipelineStats, ProgressTracker};
pub use retriever::{ContextRetriever, RetrievedContext};
