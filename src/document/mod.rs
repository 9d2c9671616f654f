// file: src/document/mod.rs
// description: structured dictionary document built from entries, renderer contract
// reference: heading/paragraph/bullet block model rendered to word-processor formats

pub mod docx;
pub mod markdown;

pub use docx::DocxRenderer;
pub use markdown::MarkdownRenderer;

use crate::config::{CitationStyle, OutputFormat};
use crate::error::Result;
use crate::models::{DictionaryEntry, Reference};
use crate::utils::validation::Validator;

pub const DOCUMENT_TITLE: &str = "Diccionario Cultural - Visión Maya";
pub const TERM_HEADING: &str = "Término";
pub const DEFINITION_HEADING: &str = "Definición";
pub const SOURCES_HEADING: &str = "Fuentes";
pub const DISCLAIMER: &str = "Nota: Este documento fue generado por un asistente de IA. Verifica la información con fuentes académicas para un análisis más profundo.";
pub const BATCH_FILE_STEM: &str = "Diccionario_Cultural_Maya_Batch";

/// Run of inline text inside a bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub italic: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullet(Vec<Span>),
}

/// Ordered blocks of a dictionary document, independent of file format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Term paragraphs in document order.
    pub fn terms(&self) -> Vec<&str> {
        self.blocks
            .windows(2)
            .filter_map(|pair| match pair {
                [Block::Heading { text, .. }, Block::Paragraph(term)] if text == TERM_HEADING => {
                    Some(term.as_str())
                }
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Serializes a `Document` into a transferable byte buffer.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &Document) -> Result<Vec<u8>>;

    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Docx => Box::new(DocxRenderer::new()),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
    }
}

/// A rendered document ready to be handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl GeneratedFile {
    pub fn render(
        renderer: &dyn DocumentRenderer,
        document: &Document,
        file_stem: &str,
    ) -> Result<Self> {
        Ok(Self {
            file_name: format!("{}.{}", file_stem, renderer.extension()),
            mime_type: renderer.mime_type(),
            bytes: renderer.render(document)?,
        })
    }

    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map_or(self.file_name.as_str(), |(stem, _)| stem)
    }
}

/// File stem for a single-entry download.
pub fn single_file_stem(term: &str) -> String {
    format!("Definicion_{}", Validator::sanitize_file_stem(term))
}

/// Lays out entries as heading/paragraph/bullet blocks. Performs no I/O.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    citation_style: CitationStyle,
}

impl DocumentBuilder {
    pub fn new(citation_style: CitationStyle) -> Self {
        Self { citation_style }
    }

    pub fn build_single(&self, entry: &DictionaryEntry) -> Document {
        self.build_batch(std::slice::from_ref(entry))
    }

    /// One block group per entry in input order. An empty slice still
    /// yields the title and disclaimer.
    pub fn build_batch(&self, entries: &[DictionaryEntry]) -> Document {
        let mut document = Document::default();
        document.push(Block::Title(DOCUMENT_TITLE.to_string()));

        for entry in entries {
            self.push_entry(&mut document, entry);
        }

        document.push(Block::Paragraph(DISCLAIMER.to_string()));
        document
    }

    fn push_entry(&self, document: &mut Document, entry: &DictionaryEntry) {
        document.push(Block::Heading {
            level: 1,
            text: TERM_HEADING.to_string(),
        });
        document.push(Block::Paragraph(entry.term().to_string()));

        document.push(Block::Heading {
            level: 2,
            text: DEFINITION_HEADING.to_string(),
        });
        document.push(Block::Paragraph(entry.definition().to_string()));

        if !entry.has_sources() {
            return;
        }

        document.push(Block::Heading {
            level: 1,
            text: SOURCES_HEADING.to_string(),
        });
        for source in entry.sources() {
            document.push(Block::Bullet(self.citation_spans(source)));
        }
    }

    fn citation_spans(&self, reference: &Reference) -> Vec<Span> {
        match self.citation_style {
            CitationStyle::Link => vec![Span::plain(reference.url.clone())],
            CitationStyle::Structured => vec![
                Span::plain(reference.lead()),
                Span::italic(reference.title.clone()),
                Span::plain(reference.tail()),
            ],
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(CitationStyle::Structured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(term: &str, urls: &[&str]) -> DictionaryEntry {
        DictionaryEntry::assemble(
            term,
            format!("{} definition", term),
            urls.iter().map(|u| Reference::from_link(*u)).collect(),
        )
        .unwrap()
    }

    fn count_headings(document: &Document, heading: &str) -> usize {
        document
            .blocks()
            .iter()
            .filter(|b| matches!(b, Block::Heading { text, .. } if text == heading))
            .count()
    }

    #[test]
    fn test_single_entry_layout() {
        let document = DocumentBuilder::default().build_single(&entry("Ajaw", &["U1", "U2"]));

        assert_eq!(
            document.blocks()[..5],
            [
                Block::Title(DOCUMENT_TITLE.to_string()),
                Block::Heading {
                    level: 1,
                    text: TERM_HEADING.to_string()
                },
                Block::Paragraph("Ajaw".to_string()),
                Block::Heading {
                    level: 2,
                    text: DEFINITION_HEADING.to_string()
                },
                Block::Paragraph("Ajaw definition".to_string()),
            ]
        );
        assert_eq!(count_headings(&document, SOURCES_HEADING), 1);
        assert_eq!(
            document.blocks().last(),
            Some(&Block::Paragraph(DISCLAIMER.to_string()))
        );
    }

    #[test]
    fn test_no_sources_heading_without_sources() {
        let document = DocumentBuilder::default().build_batch(&[
            entry("Ajaw", &["U1"]),
            entry("Unknown123", &[]),
        ]);

        assert_eq!(count_headings(&document, TERM_HEADING), 2);
        assert_eq!(count_headings(&document, SOURCES_HEADING), 1);
        assert_eq!(document.terms(), vec!["Ajaw", "Unknown123"]);
    }

    #[test]
    fn test_empty_batch_is_title_and_disclaimer() {
        let document = DocumentBuilder::default().build_batch(&[]);
        assert_eq!(
            document.blocks(),
            &[
                Block::Title(DOCUMENT_TITLE.to_string()),
                Block::Paragraph(DISCLAIMER.to_string()),
            ]
        );
    }

    #[test]
    fn test_single_matches_batch_of_one() {
        let builder = DocumentBuilder::default();
        let item = entry("Ceiba (Árbol sagrado)", &["U1"]);
        assert_eq!(builder.build_single(&item), builder.build_batch(&[item.clone()]));
    }

    #[test]
    fn test_structured_citation_spans() {
        let mut reference = Reference::from_link("https://example.org");
        reference.title = "Popol Vuh".to_string();
        let item = DictionaryEntry::assemble("K'uh", "def", vec![reference]).unwrap();

        let document = DocumentBuilder::default().build_single(&item);
        let bullet = document
            .blocks()
            .iter()
            .find_map(|b| match b {
                Block::Bullet(spans) => Some(spans.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(
            bullet,
            vec![
                Span::plain("Autor desconocido. (s.f.). "),
                Span::italic("Popol Vuh"),
                Span::plain(". Revista desconocida, (), . https://example.org"),
            ]
        );
    }

    #[test]
    fn test_link_citation_style() {
        let builder = DocumentBuilder::new(CitationStyle::Link);
        let document = builder.build_single(&entry("Sol", &["U9"]));
        assert!(document
            .blocks()
            .contains(&Block::Bullet(vec![Span::plain("U9")])));
    }

    #[test]
    fn test_file_naming() {
        assert_eq!(single_file_stem("Balam (Jaguar)"), "Definicion_Balam_(Jaguar)");

        let file = GeneratedFile::render(
            &MarkdownRenderer,
            &DocumentBuilder::default().build_batch(&[]),
            BATCH_FILE_STEM,
        )
        .unwrap();
        assert_eq!(file.file_name, "Diccionario_Cultural_Maya_Batch.md");
        assert_eq!(file.stem(), BATCH_FILE_STEM);
        assert_eq!(file.mime_type, "text/markdown");
    }
}
