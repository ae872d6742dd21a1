// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Keyword Locator
//!
//! Finds every occurrence of a keyword list in a Word document and reports,
//! for each hit, the keyword, an estimated page number and a short context
//! snippet.
//!
//! ## Pipeline
//!
//! - **Reading**: `.docx` → ordered [`Paragraph`]s with page-break flags ([`reader`])
//! - **Indexing**: paragraphs → one text buffer plus estimated page breaks
//!   ([`search::PageIndexer`])
//! - **Scanning**: buffer + keywords → [`Occurrence`]s grouped by keyword,
//!   overlapping matches included ([`search::OccurrenceScanner`])
//!
//! Page numbers are estimates: a paragraph wraps every 80 characters, a page
//! holds 40 lines, and explicit page breaks start a new page. Both numbers are
//! configurable through [`LocatorConfig`].
//!
//! Keywords come either from a delimited string (full-width comma by default)
//! or from a maintained region catalog ([`regions`]).
//!
//! ## Quick Start
//!
//! ```ignore
//! use keyword_locator::{Document, KeywordLocator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::open("report.docx")?;
//! let locator = KeywordLocator::default();
//! for o in locator.locate(&doc, &["北京", "上海"])? {
//!     println!("{} p.{}: {}", o.keyword, o.page, o.context);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Document model and readers
pub mod document;
pub mod reader;

// Page indexing and keyword scanning
pub mod search;

// Named keyword lists
pub mod regions;

// High-level API
pub mod api;

// Re-exports
pub use api::{CheckType, KeywordLocator, ScanReport};
pub use config::LocatorConfig;
pub use document::{Document, Paragraph};
pub use error::{Error, Result};
pub use search::{Occurrence, OccurrenceScanner, PageIndexer};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "keyword_locator");
    }
}
