//! High-level API for checking documents against keyword lists.
//!
//! [`KeywordLocator`] ties the pieces together: read a `.docx`, index its
//! pages, resolve the keyword list and scan.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keyword_locator::api::KeywordLocator;
//!
//! let locator = KeywordLocator::default();
//! let occurrences = locator.locate_file("report.docx", &["北京", "上海"])?;
//! ```
//!
//! ## Full Check
//!
//! ```ignore
//! use keyword_locator::api::{CheckType, KeywordLocator};
//! use keyword_locator::regions::JsonFileStore;
//!
//! let store = JsonFileStore::new("china_regions.json");
//! let bytes = std::fs::read("report.docx")?;
//! let report = KeywordLocator::default().check(
//!     "report.docx",
//!     &bytes,
//!     CheckType::ChinaRegions,
//!     None,
//!     &store,
//! )?;
//! println!("{}", serde_json::to_string(&report)?);
//! ```

mod locator;

pub use locator::{CheckType, ErrorReport, KeywordLocator, ScanReport};
