//! Paragraph-based document model.
//!
//! A [`Document`] is the immutable input of the indexer: an ordered sequence of
//! paragraphs, each with its plain text and whether it carries an explicit
//! page-break marker. Paragraphs are addressed by their 0-based position.

use std::path::Path;

use crate::error::Result;
use crate::reader::DocxReader;

/// A unit of document text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Plain text content (may be empty or whitespace-only)
    pub text: String,
    /// Whether the paragraph contains an explicit page-break marker
    pub has_page_break: bool,
}

impl Paragraph {
    /// Create a paragraph without a page-break marker.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_page_break: false,
        }
    }

    /// Create a paragraph that ends with an explicit page break.
    pub fn with_page_break(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_page_break: true,
        }
    }

    /// True when the text is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An ordered sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a document from paragraphs in reading order.
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Create a document from plain paragraph texts, none of them with page breaks.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Paragraph::new).collect())
    }

    /// Open a `.docx` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        DocxReader::new().read_path(path)
    }

    /// Parse `.docx` bytes.
    pub fn from_docx_bytes(bytes: &[u8]) -> Result<Self> {
        DocxReader::new().read_bytes(bytes)
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// True when the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl From<Vec<Paragraph>> for Document {
    fn from(paragraphs: Vec<Paragraph>) -> Self {
        Self::new(paragraphs)
    }
}
