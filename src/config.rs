//! Configuration for keyword location.
//!
//! The pagination heuristic and the context window are estimates with no single
//! correct value, so they are tunable here rather than fixed in the indexer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Default number of estimated lines that fit on one page.
pub const DEFAULT_LINES_PER_PAGE: usize = 40;

/// Default number of characters assumed to fit on one display line.
pub const DEFAULT_CHARS_PER_LINE: usize = 80;

/// Default number of characters kept on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

/// Default separator for free-form keyword input (full-width comma).
pub const DEFAULT_KEYWORD_SEPARATOR: char = '，';

/// Keyword locator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Estimated lines per page before a new page is assumed.
    pub lines_per_page: usize,

    /// Characters per display line used by the line-wrap estimate.
    pub chars_per_line: usize,

    /// Characters of context kept before and after each match.
    pub context_chars: usize,

    /// Separator used to split a raw keyword string.
    pub keyword_separator: char,

    /// Match keywords regardless of case.
    pub case_insensitive: bool,

    /// Match keywords only at word boundaries.
    pub whole_word: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LocatorConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            context_chars: DEFAULT_CONTEXT_CHARS,
            keyword_separator: DEFAULT_KEYWORD_SEPARATOR,
            case_insensitive: false,
            whole_word: false,
        }
    }

    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
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

    /// Set the context window width.
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Set the keyword separator.
    pub fn with_keyword_separator(mut self, separator: char) -> Self {
        self.keyword_separator = separator;
        self
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Match whole words only.
    pub fn with_whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }
}
