//! Keyword occurrence scanning.
//!
//! Finds every occurrence of every keyword in a [`TextBuffer`], overlapping
//! matches included, and annotates each with its estimated page and a context
//! snippet. Results are grouped by keyword in input order, and by buffer
//! offset within a keyword.

use super::page_index::{PageBreakTable, PageIndex, TextBuffer};
use crate::config::LocatorConfig;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// One located keyword occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// The trimmed keyword that matched
    pub keyword: String,
    /// Estimated 1-based page number
    pub page: usize,
    /// Surrounding text, whitespace-trimmed
    pub context: String,
    /// Byte offset of the match in the buffer
    #[serde(skip)]
    pub offset: usize,
    /// Index of the paragraph containing the match start
    #[serde(skip)]
    pub paragraph: usize,
}

/// Options for keyword matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Case insensitive search
    pub case_insensitive: bool,
    /// Match whole words only
    pub whole_word: bool,
}

impl SearchOptions {
    /// Create new default search options (exact, case-sensitive substrings).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable case-insensitive search.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Default::default()
        }
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Match whole words only.
    ///
    /// Boundaries are enforced only at keyword edges that are ASCII word
    /// characters; a CJK edge matches inside running CJK text.
    pub fn with_whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }
}

/// Scans a text buffer for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccurrenceScanner {
    context_chars: usize,
    options: SearchOptions,
}

impl Default for OccurrenceScanner {
    fn default() -> Self {
        Self::from_config(&LocatorConfig::default())
    }
}

impl OccurrenceScanner {
    /// Create a scanner with default context width and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner from configuration.
    pub fn from_config(config: &LocatorConfig) -> Self {
        Self {
            context_chars: config.context_chars,
            options: SearchOptions {
                case_insensitive: config.case_insensitive,
                whole_word: config.whole_word,
            },
        }
    }

    /// Set the number of context characters on each side of a match.
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Set matching options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Scan a [`PageIndex`] for keywords.
    pub fn scan_index<S: AsRef<str>>(
        &self,
        index: &PageIndex,
        keywords: &[S],
    ) -> Result<Vec<Occurrence>> {
        self.scan(index.buffer(), index.breaks(), keywords)
    }

    /// Find all occurrences of `keywords` in `buffer`.
    ///
    /// Keywords are trimmed and blank ones skipped; an empty list yields an
    /// empty result. Duplicate keywords are scanned, and reported, once per
    /// appearance in the list.
    pub fn scan<S: AsRef<str>>(
        &self,
        buffer: &TextBuffer,
        breaks: &PageBreakTable,
        keywords: &[S],
    ) -> Result<Vec<Occurrence>> {
        let mut occurrences = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }

            let matcher = self.build_matcher(keyword)?;
            let found = self.scan_keyword(buffer, breaks, keyword, &matcher, &mut occurrences);
            log::debug!("Keyword '{}': {} occurrences", keyword, found);
        }

        Ok(occurrences)
    }

    /// Collect matches of one keyword, advancing one character past each
    /// match start so that overlapping matches are reported.
    fn scan_keyword(
        &self,
        buffer: &TextBuffer,
        breaks: &PageBreakTable,
        keyword: &str,
        matcher: &Regex,
        out: &mut Vec<Occurrence>,
    ) -> usize {
        let text = buffer.as_str();
        let before = out.len();
        let mut position = 0;

        while position < text.len() {
            let Some(found) = matcher.find_at(text, position) else {
                break;
            };
            let start = found.start();
            let paragraph = buffer.paragraph_at(start).unwrap_or(0);

            out.push(Occurrence {
                keyword: keyword.to_string(),
                page: breaks.page_at(paragraph),
                context: self.extract_context(text, start, found.end()),
                offset: start,
                paragraph,
            });

            position = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }

        out.len() - before
    }

    /// Up to `context_chars` characters on each side of `start..end`,
    /// clipped to the buffer and trimmed.
    fn extract_context(&self, text: &str, start: usize, end: usize) -> String {
        let from = text[..start]
            .char_indices()
            .rev()
            .take(self.context_chars)
            .last()
            .map_or(start, |(i, _)| i);
        let to = text[end..]
            .char_indices()
            .nth(self.context_chars)
            .map_or(text.len(), |(i, _)| end + i);
        text[from..to].trim().to_string()
    }

    /// Build a literal matcher for a keyword.
    fn build_matcher(&self, keyword: &str) -> Result<Regex> {
        let mut pattern = regex::escape(keyword);
        if self.options.whole_word {
            if keyword.chars().next().is_some_and(is_ascii_word) {
                pattern = format!(r"\b{}", pattern);
            }
            if keyword.chars().next_back().is_some_and(is_ascii_word) {
                pattern = format!(r"{}\b", pattern);
            }
        }

        RegexBuilder::new(&pattern)
            .case_insensitive(self.options.case_insensitive)
            .build()
            .map_err(|e| Error::InvalidKeyword(format!("{}: {}", keyword, e)))
    }
}

fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
