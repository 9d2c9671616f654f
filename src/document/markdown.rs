// file: src/document/markdown.rs
// description: Markdown renderer for terminal previews and plain-text export

use crate::document::{Block, Document, DocumentRenderer, Span};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn to_markdown(&self, document: &Document) -> String {
        let sections: Vec<String> = document.blocks().iter().map(render_block).collect();
        let mut output = sections.join("\n\n");
        output.push('\n');
        output
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(self.to_markdown(document).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn mime_type(&self) -> &'static str {
        "text/markdown"
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Title(text) => format!("# {}", text),
        Block::Heading { level, text } => {
            format!("{} {}", "#".repeat(usize::from(*level) + 1), text)
        }
        Block::Paragraph(text) => text
            .trim_end()
            .lines()
            .map(escape_line)
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Bullet(spans) => format!("- {}", render_spans(spans)),
    }
}

/// Keeps a paragraph line from being read as a heading, quote, list item
/// or thematic break.
fn escape_line(line: &str) -> String {
    let line = line.trim_start();
    if line.starts_with(['#', '>', '-', '+', '*', '=', '_']) {
        return format!("\\{}", line);
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    match line[digits..].chars().next() {
        Some(marker @ ('.' | ')')) if digits > 0 => {
            format!("{}\\{}{}", &line[..digits], marker, &line[digits + 1..])
        }
        _ => line.to_string(),
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .filter(|s| !s.text.is_empty())
        .map(|s| {
            if s.italic {
                format!("*{}*", s.text.trim())
            } else {
                s.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentBuilder;
    use crate::models::{DictionaryEntry, Reference};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_layout() {
        let mut reference = Reference::from_link("U1");
        reference.title = "Popol Vuh".to_string();
        let entry = DictionaryEntry::assemble("Ajaw", "Señor divino.", vec![reference]).unwrap();
        let document = DocumentBuilder::default().build_single(&entry);

        let markdown = MarkdownRenderer.to_markdown(&document);
        assert_eq!(
            markdown,
            "# Diccionario Cultural - Visión Maya\n\n\
             ## Término\n\n\
             Ajaw\n\n\
             ### Definición\n\n\
             Señor divino.\n\n\
             ## Fuentes\n\n\
             - Autor desconocido. (s.f.). *Popol Vuh*. Revista desconocida, (), . U1\n\n\
             Nota: Este documento fue generado por un asistente de IA. Verifica la información con fuentes académicas para un análisis más profundo.\n"
        );
    }

    #[test]
    fn test_paragraph_markers_are_escaped() {
        let entry = DictionaryEntry::assemble(
            "# Ajaw",
            "Señor divino.\n# no es título\n- ni lista\n  1. ni numerada\n1996 fue el año",
            Vec::new(),
        )
        .unwrap();
        let markdown = MarkdownRenderer.to_markdown(&DocumentBuilder::default().build_single(&entry));

        assert!(markdown.contains("## Término\n\n\\# Ajaw\n\n"));
        assert!(markdown.contains(
            "Señor divino.\n\\# no es título\n\\- ni lista\n1\\. ni numerada\n1996 fue el año"
        ));
    }

    #[test]
    fn test_empty_title_span_is_skipped() {
        let entry =
            DictionaryEntry::assemble("Sol", "def", vec![Reference::from_link("U2")]).unwrap();
        let markdown = MarkdownRenderer.to_markdown(&DocumentBuilder::default().build_single(&entry));
        assert!(markdown.contains("- Autor desconocido. (s.f.). . Revista desconocida"));
        assert!(!markdown.contains("**"));
    }
}
