//! Document readers.
//!
//! Readers turn a document file into the paragraph sequence consumed by the
//! indexer. Only Word documents (`.docx`, Office Open XML) are supported; they
//! are ZIP archives whose main part is `word/document.xml`.
//!
//! # Example
//!
//! ```ignore
//! use keyword_locator::reader::{is_supported_file, DocxReader};
//!
//! if is_supported_file("report.docx") {
//!     let document = DocxReader::new().read_path("report.docx")?;
//!     println!("{} paragraphs", document.len());
//! }
//! ```

mod docx;

pub use docx::{DocxReader, ReaderOptions};

/// File extensions accepted by [`is_supported_file`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx"];

/// Check whether a file name has a supported document extension.
///
/// The comparison is case-insensitive and looks only at the text after the
/// last dot, so `"report.DOCX"` is accepted and `"docx"` or `"report."` are not.
pub fn is_supported_file(filename: &str) -> bool {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        log::debug!("No extension in file name: {}", filename);
        return false;
    };
    let extension = extension.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&extension.as_str())
}
