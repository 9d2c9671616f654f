// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod utils;

pub use catalog::{TermCatalog, TermSelection};
pub use config::{
    CitationStyle, Config, GenerationConfig, GenerationFailurePolicy, OutputConfig,
    OutputFormat, PipelineConfig, SearchConfig,
};
pub use document::{
    Document, DocumentBuilder, DocumentRenderer, DocxRenderer, GeneratedFile, MarkdownRenderer,
};
pub use error::{DictionaryError, ProviderError, Result};
pub use exporter::{ExportManifest, JsonExporter, write_file};
pub use models::{DictionaryEntry, Reference, SearchHit, SearchResponse, Term};
pub use pipeline::{
    BatchPipeline, BatchReport, CancellationToken, PipelineStats, ProgressTracker, SingleReport,
    TermOutcome, TermState,
};
pub use providers::{GenerationProvider, SearchProvider, SerplyClient, TogetherClient};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let catalog = TermCatalog::default();
        assert!(!catalog.is_empty());
        let _builder = DocumentBuilder::default();
    }
}
