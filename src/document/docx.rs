// file: src/document/docx.rs
// description: Office Open XML (.docx) renderer built on quick-xml and zip
// reference: ECMA-376 WordprocessingML minimal package

use crate::document::{Block, Document, DocumentRenderer, Span};
use crate::error::{DictionaryError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const BULLET_NUM_ID: &str = "1";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:lang w:val="es-ES"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:sz w:val="52"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:color w:val="2F5496"/><w:sz w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="160" w:after="80"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:color w:val="2F5496"/><w:sz w:val="26"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:style></w:styles>"#;

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#;

/// Renders documents to .docx. Entries carry a fixed timestamp so the same
/// document always produces the same bytes.
#[derive(Debug, Clone)]
pub struct DocxRenderer {
    compression: CompressionMethod,
}

impl DocxRenderer {
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Body part (`word/document.xml`) for the given blocks.
    pub fn document_xml(&self, document: &Document) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());

        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
        )?;
        emit(
            &mut writer,
            Event::Start(BytesStart::new("w:document").with_attributes([("xmlns:w", WORD_NS)])),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new("w:body")))?;

        for block in document.blocks() {
            match block {
                Block::Title(text) => {
                    write_paragraph(&mut writer, Some("Title"), false, &[Span::plain(text.as_str())])?
                }
                Block::Heading { level, text } => {
                    let style = format!("Heading{}", (*level).clamp(1, 2));
                    write_paragraph(&mut writer, Some(&style), false, &[Span::plain(text.as_str())])?
                }
                Block::Paragraph(text) => {
                    write_paragraph(&mut writer, None, false, &[Span::plain(text.as_str())])?
                }
                Block::Bullet(spans) => {
                    write_paragraph(&mut writer, Some("ListBullet"), true, spans)?
                }
            }
        }

        write_section_properties(&mut writer)?;
        emit(&mut writer, Event::End(BytesEnd::new("w:body")))?;
        emit(&mut writer, Event::End(BytesEnd::new("w:document")))?;

        Ok(writer.into_inner())
    }

    fn package(&self, document_xml: &[u8]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::<()>::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        let parts: [(&str, &[u8]); 6] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
            ("word/document.xml", document_xml),
            ("word/styles.xml", STYLES_XML.as_bytes()),
            ("word/numbering.xml", NUMBERING_XML.as_bytes()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
        ];

        for (name, content) in parts {
            zip.start_file(name, options).map_err(|e| {
                DictionaryError::Document(format!("Failed to start zip entry {}: {}", name, e))
            })?;
            zip.write_all(content)?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| DictionaryError::Document(format!("Failed to finalize docx: {}", e)))?;
        Ok(cursor.into_inner())
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for DocxRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let body = self.document_xml(document)?;
        let bytes = self.package(&body)?;
        debug!(
            "Rendered docx: {} blocks, {} bytes",
            document.blocks().len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "docx"
    }

    fn mime_type(&self) -> &'static str {
        DOCX_MIME
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DictionaryError::Document(format!("XML write failed: {}", e)))
}

fn empty_with_val<W: Write>(writer: &mut Writer<W>, tag: &str, val: &str) -> Result<()> {
    emit(
        writer,
        Event::Empty(BytesStart::new(tag).with_attributes([("w:val", val)])),
    )
}

fn write_paragraph<W: Write>(
    writer: &mut Writer<W>,
    style: Option<&str>,
    bulleted: bool,
    spans: &[Span],
) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("w:p")))?;

    if style.is_some() || bulleted {
        emit(writer, Event::Start(BytesStart::new("w:pPr")))?;
        if let Some(style) = style {
            empty_with_val(writer, "w:pStyle", style)?;
        }
        if bulleted {
            emit(writer, Event::Start(BytesStart::new("w:numPr")))?;
            empty_with_val(writer, "w:ilvl", "0")?;
            empty_with_val(writer, "w:numId", BULLET_NUM_ID)?;
            emit(writer, Event::End(BytesEnd::new("w:numPr")))?;
        }
        emit(writer, Event::End(BytesEnd::new("w:pPr")))?;
    }

    for span in spans.iter().filter(|s| !s.text.is_empty()) {
        write_run(writer, span)?;
    }

    emit(writer, Event::End(BytesEnd::new("w:p")))
}

/// One `w:r` per span; embedded newlines become `w:br` line breaks.
fn write_run<W: Write>(writer: &mut Writer<W>, span: &Span) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("w:r")))?;

    if span.italic {
        emit(writer, Event::Start(BytesStart::new("w:rPr")))?;
        emit(writer, Event::Empty(BytesStart::new("w:i")))?;
        emit(writer, Event::End(BytesEnd::new("w:rPr")))?;
    }

    for (idx, line) in span.text.split('\n').enumerate() {
        if idx > 0 {
            emit(writer, Event::Empty(BytesStart::new("w:br")))?;
        }
        let line = xml_text(line.strip_suffix('\r').unwrap_or(line));
        if line.is_empty() {
            continue;
        }
        emit(
            writer,
            Event::Start(BytesStart::new("w:t").with_attributes([("xml:space", "preserve")])),
        )?;
        emit(writer, Event::Text(BytesText::new(&line)))?;
        emit(writer, Event::End(BytesEnd::new("w:t")))?;
    }

    emit(writer, Event::End(BytesEnd::new("w:r")))
}

/// Drops characters XML 1.0 forbids in text. Vertical tab and form feed
/// become spaces so the words around them stay apart.
fn xml_text(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            '\u{0B}' | '\u{0C}' => Some(' '),
            '\t' | '\n' | '\r' => Some(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => None,
            _ => Some(c),
        })
        .collect()
}

fn write_section_properties<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("w:sectPr")))?;
    emit(
        writer,
        Event::Empty(BytesStart::new("w:pgSz").with_attributes([("w:w", "12240"), ("w:h", "15840")])),
    )?;
    emit(
        writer,
        Event::Empty(BytesStart::new("w:pgMar").with_attributes([
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ])),
    )?;
    emit(writer, Event::End(BytesEnd::new("w:sectPr")))
}
