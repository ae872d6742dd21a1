//! Keyword location over paragraph documents.
//!
//! Two layered stages:
//! - [`PageIndexer`] flattens paragraphs into a [`TextBuffer`] and estimates a
//!   [`PageBreakTable`]
//! - [`OccurrenceScanner`] searches the buffer for each keyword and maps every
//!   match back to a paragraph, a page and a context snippet
//!
//! Both stages are pure and hold no state between calls.
//!
//! ## Example
//!
//! ```ignore
//! use keyword_locator::document::Document;
//! use keyword_locator::search::{OccurrenceScanner, PageIndexer};
//!
//! let doc = Document::from_texts(["北京报告", "详情在北京和上海"]);
//! let index = PageIndexer::new().build(doc.paragraphs());
//! let occurrences = OccurrenceScanner::new().scan_index(&index, &["北京", "上海"])?;
//! for o in &occurrences {
//!     println!("{} on page {}: {}", o.keyword, o.page, o.context);
//! }
//! ```

mod keywords;
mod page_index;
mod scanner;

pub use keywords::{normalize_keywords, require_keywords, split_keywords};
pub use page_index::{
    BreakKind, Breakpoint, PageBreakTable, PageIndex, PageIndexer, TextBuffer, PARAGRAPH_SEPARATOR,
};
pub use scanner::{Occurrence, OccurrenceScanner, SearchOptions};
