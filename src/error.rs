//! Error types for the keyword locator.
//!
//! Document reading, keyword resolution and region-store maintenance all report
//! through the single [`Error`] enum. Indexing and scanning never fail on
//! content; the only scan-time failure is a keyword matcher that cannot be built.

/// Result type alias for keyword locator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating keywords.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be parsed into a paragraph sequence
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The file is not a supported document type
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// No usable keyword was supplied
    #[error("At least one keyword is required")]
    EmptyKeywordSet,

    /// The named keyword list is empty or could not be loaded
    #[error("Keyword list is empty")]
    EmptyKeywordList,

    /// Keyword source name is not recognised
    #[error("Invalid check type: {0}")]
    InvalidCheckType(String),

    /// A keyword matcher could not be compiled
    #[error("Invalid keyword '{0}'")]
    InvalidKeyword(String),

    /// Region level does not exist in the catalog
    #[error("Unknown region level: {0}")]
    UnknownLevel(String),

    /// Region name is empty after trimming
    #[error("Region name must not be empty")]
    EmptyName,

    /// Region name already present in the level
    #[error("Region '{name}' already exists in level '{level}'")]
    DuplicateName {
        /// Level the name was added to
        level: String,
        /// The duplicate name
        name: String,
    },

    /// Region name not present in the level
    #[error("Region '{name}' not found in level '{level}'")]
    NameNotFound {
        /// Level that was searched
        level: String,
        /// The missing name
        name: String,
    },

    /// Region store content has an unexpected shape
    #[error("Invalid region catalog: {0}")]
    InvalidCatalog(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
