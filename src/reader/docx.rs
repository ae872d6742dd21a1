//! DOCX paragraph extraction.
//!
//! Walks the main document part of a Word file and produces one [`Paragraph`]
//! per body-level `<w:p>`, keeping the run text and noting explicit page breaks
//! (`<w:br w:type="page"/>`).

use crate::document::{Document, Paragraph};
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const DEFAULT_MAIN_PART: &str = "word/document.xml";
const PACKAGE_RELS: &str = "_rels/.rels";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

/// Options controlling which paragraphs are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Also emit paragraphs found inside tables
    pub include_tables: bool,
}

impl ReaderOptions {
    /// Include table cell paragraphs.
    pub fn with_include_tables(mut self, value: bool) -> Self {
        self.include_tables = value;
        self
    }
}

/// DOCX to [`Document`] reader.
#[derive(Debug, Clone, Default)]
pub struct DocxReader {
    options: ReaderOptions,
}

impl DocxReader {
    /// Create a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom options.
    pub fn with_options(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Read a `.docx` file from disk.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Document> {
        let bytes = std::fs::read(path.as_ref())?;
        self.read_bytes(&bytes)
    }

    /// Read `.docx` bytes.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            Error::MalformedDocument(format!("Failed to open DOCX archive: {}", e))
        })?;

        let part_name = main_part_name(&mut archive);
        let xml = read_part(&mut archive, &part_name)?;
        let paragraphs = self.parse_document(&xml)?;

        log::debug!(
            "Read {} paragraphs from {} ({} with page breaks)",
            paragraphs.len(),
            part_name,
            paragraphs.iter().filter(|p| p.has_page_break).count()
        );

        Ok(Document::new(paragraphs))
    }

    /// Parse the main document XML into paragraphs.
    fn parse_document(&self, xml: &str) -> Result<Vec<Paragraph>> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        // Paragraph currently being collected; None while inside a skipped one.
        let mut current: Option<Paragraph> = None;
        let mut paragraph_depth = 0usize;
        let mut table_depth = 0usize;
        let mut in_run = false;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        if paragraph_depth == 0 {
                            current = self.accepts(table_depth).then(Paragraph::default);
                        }
                        paragraph_depth += 1;
                    },
                    b"tbl" => table_depth += 1,
                    b"r" if paragraph_depth == 1 => in_run = true,
                    b"t" if paragraph_depth == 1 && in_run => in_text = true,
                    _ => handle_marker(e, paragraph_depth, in_run, current.as_mut()),
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        paragraph_depth = paragraph_depth.saturating_sub(1);
                        if paragraph_depth == 0 {
                            in_run = false;
                            in_text = false;
                            if let Some(paragraph) = current.take() {
                                paragraphs.push(paragraph);
                            }
                        }
                    },
                    b"tbl" => table_depth = table_depth.saturating_sub(1),
                    b"r" if paragraph_depth == 1 => in_run = false,
                    b"t" if paragraph_depth == 1 => in_text = false,
                    _ => {},
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    // <w:p/> is an empty paragraph that still takes a slot
                    b"p" => {
                        if paragraph_depth == 0 && self.accepts(table_depth) {
                            paragraphs.push(Paragraph::default());
                        }
                    },
                    _ => handle_marker(e, paragraph_depth, in_run, current.as_mut()),
                },
                Ok(Event::Text(e)) => {
                    if in_text {
                        if let Some(paragraph) = current.as_mut() {
                            let text = e.unescape().map_err(|err| {
                                Error::MalformedDocument(format!("Bad text content: {}", err))
                            })?;
                            paragraph.text.push_str(&text);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::MalformedDocument(format!(
                        "XML parse error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        if paragraph_depth > 0 {
            return Err(Error::MalformedDocument(
                "Document ended inside an open paragraph".to_string(),
            ));
        }

        Ok(paragraphs)
    }

    fn accepts(&self, table_depth: usize) -> bool {
        table_depth == 0 || self.options.include_tables
    }
}

/// Apply run-level markers (breaks, tabs, hyphens) to the open paragraph.
fn handle_marker(
    e: &BytesStart,
    paragraph_depth: usize,
    in_run: bool,
    paragraph: Option<&mut Paragraph>,
) {
    let Some(paragraph) = paragraph else {
        return;
    };

    if e.local_name().as_ref() == b"br" && paragraph_depth >= 1 {
        match get_attribute(e, "type").as_deref() {
            Some("page") => {
                paragraph.has_page_break = true;
                return;
            },
            Some("column") => return,
            _ => {},
        }
    }

    // Nested text boxes and tab-stop definitions are not paragraph text.
    if paragraph_depth != 1 || !in_run {
        return;
    }

    match e.local_name().as_ref() {
        b"br" | b"cr" => paragraph.text.push('\n'),
        b"tab" | b"ptab" => paragraph.text.push('\t'),
        b"noBreakHyphen" => paragraph.text.push('-'),
        _ => {},
    }
}

/// Locate the main document part through the package relationships.
fn main_part_name<R: Read + Seek>(archive: &mut ZipArchive<R>) -> String {
    let Ok(rels) = read_part(archive, PACKAGE_RELS) else {
        return DEFAULT_MAIN_PART.to_string();
    };

    let mut reader = Reader::from_str(&rels);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let is_main = get_attribute(e, "Type")
                    .is_some_and(|t| t.ends_with(OFFICE_DOCUMENT_REL));
                if is_main {
                    if let Some(target) = get_attribute(e, "Target") {
                        return target.trim_start_matches('/').to_string();
                    }
                }
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {},
        }
        buf.clear();
    }

    DEFAULT_MAIN_PART.to_string()
}

/// Read one archive entry as UTF-8 text.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| Error::MalformedDocument(format!("Missing part {}: {}", name, e)))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::MalformedDocument(format!("Failed to read {}: {}", name, e)))?;
    Ok(content)
}

/// Helper to get an attribute value by local name.
fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        let key = attr.key.local_name();
        if key.as_ref() == name.as_bytes() {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
