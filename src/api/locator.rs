//! One-call keyword location over a document.

use crate::config::LocatorConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::reader::{is_supported_file, DocxReader, ReaderOptions};
use crate::regions::KeywordListStore;
use crate::search::{
    require_keywords, split_keywords, Occurrence, OccurrenceScanner, PageIndex, PageIndexer,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Where the keywords of a check come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    /// A separator-delimited keyword string supplied by the user
    Custom,
    /// Every name in the region store
    ChinaRegions,
}

impl CheckType {
    /// Wire name of the check type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::ChinaRegions => "china_regions",
        }
    }
}

impl FromStr for CheckType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "custom" => Ok(Self::Custom),
            "china_regions" => Ok(Self::ChinaRegions),
            other => Err(Error::InvalidCheckType(other.to_string())),
        }
    }
}

/// Successful check result, shaped like the upload response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Always true
    pub success: bool,
    /// Name of the scanned file
    pub filename: String,
    /// Occurrences grouped by keyword
    pub occurrences: Vec<Occurrence>,
    /// Keyword source used
    #[serde(rename = "checkType")]
    pub check_type: CheckType,
}

/// Failed check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Always false
    pub success: bool,
    /// Human-readable failure
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(err: &Error) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

/// Reads documents, indexes them and scans for keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordLocator {
    config: LocatorConfig,
    reader: DocxReader,
}

impl KeywordLocator {
    /// Create a locator with the given configuration.
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            config,
            reader: DocxReader::new(),
        }
    }

    /// Use custom reader options.
    pub fn with_reader_options(mut self, options: ReaderOptions) -> Self {
        self.reader = DocxReader::with_options(options);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Build the page index of a document.
    pub fn index(&self, document: &Document) -> PageIndex {
        PageIndexer::from_config(&self.config).build(document.paragraphs())
    }

    /// Locate keywords in a document.
    pub fn locate<S: AsRef<str>>(
        &self,
        document: &Document,
        keywords: &[S],
    ) -> Result<Vec<Occurrence>> {
        let index = self.index(document);
        OccurrenceScanner::from_config(&self.config).scan_index(&index, keywords)
    }

    /// Locate keywords in `.docx` bytes.
    pub fn locate_docx_bytes<S: AsRef<str>>(
        &self,
        bytes: &[u8],
        keywords: &[S],
    ) -> Result<Vec<Occurrence>> {
        let document = self.reader.read_bytes(bytes)?;
        self.locate(&document, keywords)
    }

    /// Locate keywords in a `.docx` file.
    pub fn locate_file<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        keywords: &[S],
    ) -> Result<Vec<Occurrence>> {
        let path = path.as_ref();
        ensure_supported(&path.to_string_lossy())?;
        let document = self.reader.read_path(path)?;
        self.locate(&document, keywords)
    }

    /// Split a raw keyword string with the configured separator.
    pub fn split_keywords(&self, raw: &str) -> Vec<String> {
        split_keywords(raw, self.config.keyword_separator)
    }

    /// Resolve the keyword list for a check.
    ///
    /// `Custom` requires at least one non-blank keyword in `raw`;
    /// `ChinaRegions` requires a non-empty store.
    pub fn resolve_keywords(
        &self,
        check_type: CheckType,
        raw: Option<&str>,
        store: &dyn KeywordListStore,
    ) -> Result<Vec<String>> {
        match check_type {
            CheckType::Custom => require_keywords(self.split_keywords(raw.unwrap_or_default())),
            CheckType::ChinaRegions => {
                let keywords = store.keywords()?;
                if keywords.is_empty() {
                    return Err(Error::EmptyKeywordList);
                }
                Ok(keywords)
            },
        }
    }

    /// Run a complete check of an uploaded document.
    pub fn check(
        &self,
        filename: &str,
        bytes: &[u8],
        check_type: CheckType,
        raw_keywords: Option<&str>,
        store: &dyn KeywordListStore,
    ) -> Result<ScanReport> {
        ensure_supported(filename)?;
        let keywords = self.resolve_keywords(check_type, raw_keywords, store)?;
        let occurrences = self.locate_docx_bytes(bytes, keywords.as_slice())?;

        log::info!(
            "Checked {} ({}): {} keywords, {} occurrences",
            filename,
            check_type.as_str(),
            keywords.len(),
            occurrences.len()
        );

        Ok(ScanReport {
            success: true,
            filename: filename.to_string(),
            occurrences,
            check_type,
        })
    }
}

fn ensure_supported(filename: &str) -> Result<()> {
    if is_supported_file(filename) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(filename.to_string()))
    }
}
