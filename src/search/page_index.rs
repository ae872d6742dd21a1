//! Text linearization and page estimation.
//!
//! [`PageIndexer::build`] flattens a paragraph sequence into one [`TextBuffer`]
//! (every paragraph followed by `'\n'`) and records a [`PageBreakTable`] of
//! estimated page boundaries. Pages are estimated from a line-wrap heuristic
//! plus explicit page-break markers; this is not a layout engine.

use crate::config::LocatorConfig;
use crate::document::Paragraph;
use std::ops::Range;

/// Character appended after every paragraph in the buffer.
pub const PARAGRAPH_SEPARATOR: char = '\n';

/// Concatenated paragraph text with recoverable paragraph offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Byte offset where each paragraph starts; strictly increasing.
    paragraph_starts: Vec<usize>,
}

impl TextBuffer {
    /// Concatenate paragraphs, each followed by [`PARAGRAPH_SEPARATOR`].
    pub fn from_paragraphs(paragraphs: &[Paragraph]) -> Self {
        let capacity = paragraphs.iter().map(|p| p.text.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        let mut paragraph_starts = Vec::with_capacity(paragraphs.len());

        for paragraph in paragraphs {
            paragraph_starts.push(text.len());
            text.push_str(&paragraph.text);
            text.push(PARAGRAPH_SEPARATOR);
        }

        Self {
            text,
            paragraph_starts,
        }
    }

    /// The full buffer text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the buffer holds no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of paragraphs in the buffer.
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_starts.len()
    }

    /// Byte offsets where each paragraph starts.
    pub fn paragraph_starts(&self) -> &[usize] {
        &self.paragraph_starts
    }

    /// Byte range of a paragraph's text, excluding its separator.
    pub fn paragraph_range(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.paragraph_starts.get(index)?;
        let next = self
            .paragraph_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.text.len());
        Some(start..next - PARAGRAPH_SEPARATOR.len_utf8())
    }

    /// Paragraph text at `index`.
    pub fn paragraph_text(&self, index: usize) -> Option<&str> {
        self.paragraph_range(index).map(|range| &self.text[range])
    }

    /// Index of the paragraph owning byte `offset`.
    ///
    /// A paragraph owns `start <= offset < next_start`, its separator included,
    /// so an empty paragraph only owns its own separator. Offsets at or past
    /// the end of the buffer have no owner.
    pub fn paragraph_at(&self, offset: usize) -> Option<usize> {
        if offset >= self.text.len() {
            return None;
        }
        let after = self.paragraph_starts.partition_point(|&start| start <= offset);
        after.checked_sub(1)
    }
}

/// Why a page boundary was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// The paragraph carries a page-break marker; the next paragraph starts
    /// the new page.
    Explicit,
    /// The running line estimate overflowed; this paragraph starts the new page.
    Estimated,
}

/// A page boundary placed at a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Paragraph where the boundary was placed
    pub paragraph_index: usize,
    /// Page number in effect before the boundary
    pub page: usize,
    /// Marker or estimate
    pub kind: BreakKind,
}

impl Breakpoint {
    /// First paragraph index that falls on page `page + 1`.
    pub fn next_page_start(&self) -> usize {
        match self.kind {
            BreakKind::Explicit => self.paragraph_index + 1,
            BreakKind::Estimated => self.paragraph_index,
        }
    }
}

/// Ordered page boundaries; page 1 applies before the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBreakTable {
    breakpoints: Vec<Breakpoint>,
}

impl PageBreakTable {
    /// Create an empty table (every paragraph on page 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from arbitrary breakpoints, ordering them by the
    /// paragraph at which each new page starts.
    pub fn from_breakpoints(mut breakpoints: Vec<Breakpoint>) -> Self {
        breakpoints.sort_by_key(|b| (b.next_page_start(), b.paragraph_index));
        Self { breakpoints }
    }

    /// Breakpoints in paragraph order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// True when no boundary was placed.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Estimated number of pages.
    pub fn page_count(&self) -> usize {
        self.breakpoints.last().map_or(1, |b| b.page + 1)
    }

    /// Estimated 1-based page number of a paragraph.
    ///
    /// Uses the most recent breakpoint whose new page starts at or before
    /// `paragraph_index`; page 1 when none qualifies.
    pub fn page_at(&self, paragraph_index: usize) -> usize {
        let qualifying = self
            .breakpoints
            .partition_point(|b| b.next_page_start() <= paragraph_index);
        match qualifying {
            0 => 1,
            n => self.breakpoints[n - 1].page + 1,
        }
    }
}

/// Builds a [`PageIndex`] from paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndexer {
    lines_per_page: usize,
    chars_per_line: usize,
}

impl Default for PageIndexer {
    fn default() -> Self {
        Self::from_config(&LocatorConfig::default())
    }
}

impl PageIndexer {
    /// Create an indexer with default heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indexer from configuration.
    pub fn from_config(config: &LocatorConfig) -> Self {
        Self {
            lines_per_page: config.lines_per_page,
            chars_per_line: config.chars_per_line,
        }
    }

    /// Set the estimated lines per page.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines;
        self
    }

    /// Set the characters per display line.
    pub fn with_chars_per_line(mut self, chars: usize) -> Self {
        self.chars_per_line = chars;
        self
    }

    /// Estimated display lines of a paragraph:
    /// `chars / chars_per_line + embedded newlines + 1`.
    pub fn estimate_lines(&self, text: &str) -> usize {
        let chars = text.chars().count();
        let newlines = text.matches('\n').count();
        chars / self.chars_per_line.max(1) + newlines + 1
    }

    /// Linearize paragraphs and estimate page boundaries.
    pub fn build(&self, paragraphs: &[Paragraph]) -> PageIndex {
        let buffer = TextBuffer::from_paragraphs(paragraphs);
        let breaks = self.find_page_breaks(paragraphs);

        log::debug!(
            "Indexed {} paragraphs into {} bytes, {} estimated pages",
            paragraphs.len(),
            buffer.len(),
            breaks.page_count()
        );

        PageIndex { buffer, breaks }
    }

    fn find_page_breaks(&self, paragraphs: &[Paragraph]) -> PageBreakTable {
        let mut breakpoints = Vec::new();
        let mut current_page = 1;
        let mut line_count = 0;
        // Set after an explicit break: the next paragraph already opens a page.
        let mut opens_page = false;

        for (index, paragraph) in paragraphs.iter().enumerate() {
            if paragraph.is_blank() {
                continue;
            }

            let lines = self.estimate_lines(&paragraph.text);
            let first_on_page = std::mem::take(&mut opens_page);
            if first_on_page {
                line_count = lines;
            } else {
                line_count += lines;
            }

            let kind = if paragraph.has_page_break {
                Some(BreakKind::Explicit)
            } else if !first_on_page && line_count > self.lines_per_page {
                Some(BreakKind::Estimated)
            } else {
                None
            };

            if let Some(kind) = kind {
                breakpoints.push(Breakpoint {
                    paragraph_index: index,
                    page: current_page,
                    kind,
                });
                current_page += 1;
                // The paragraph's own lines carry over to the new page count.
                line_count = lines;
                opens_page = kind == BreakKind::Explicit;
            }
        }

        PageBreakTable { breakpoints }
    }
}

/// Searchable buffer plus page lookup for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    buffer: TextBuffer,
    breaks: PageBreakTable,
}

impl PageIndex {
    /// Assemble an index from parts.
    pub fn from_parts(buffer: TextBuffer, breaks: PageBreakTable) -> Self {
        Self { buffer, breaks }
    }

    /// The concatenated text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The page break table.
    pub fn breaks(&self) -> &PageBreakTable {
        &self.breaks
    }

    /// Estimated page of a paragraph.
    pub fn page_at(&self, paragraph_index: usize) -> usize {
        self.breaks.page_at(paragraph_index)
    }

    /// Estimated page of a buffer byte offset.
    pub fn page_at_offset(&self, offset: usize) -> Option<usize> {
        self.buffer.paragraph_at(offset).map(|p| self.page_at(p))
    }
}
