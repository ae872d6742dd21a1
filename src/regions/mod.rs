//! Named keyword lists of region names.
//!
//! The "china_regions" check scans a document for every name in a maintained
//! catalog. The catalog lives behind the [`KeywordListStore`] trait so callers
//! pass the store in explicitly; [`JsonFileStore`] persists it as JSON and
//! [`MemoryStore`] keeps it in memory.
//!
//! ## Example
//!
//! ```ignore
//! use keyword_locator::regions::{JsonFileStore, KeywordListStore, CITY_LEVEL};
//!
//! let store = JsonFileStore::new("china_regions.json");
//! store.add(CITY_LEVEL, "珠海")?;
//! let keywords = store.keywords()?;
//! ```

mod catalog;
mod store;

pub use catalog::{RegionCatalog, CITY_LEVEL, DEFAULT_LEVEL, DISTRICT_LEVEL, PROVINCE_LEVEL};
pub use store::{JsonFileStore, MemoryStore, DEFAULT_REGIONS_FILE};

use crate::error::Result;

/// Storage for a [`RegionCatalog`].
pub trait KeywordListStore {
    /// Load the current catalog.
    fn load(&self) -> Result<RegionCatalog>;

    /// Replace the stored catalog.
    fn save(&self, catalog: &RegionCatalog) -> Result<()>;

    /// All stored names as a keyword list.
    fn keywords(&self) -> Result<Vec<String>> {
        Ok(self.load()?.names())
    }

    /// Add a name to a level and persist. Returns the trimmed name.
    fn add(&self, level: &str, name: &str) -> Result<String> {
        let mut catalog = self.load()?;
        let name = catalog.add(level, name)?;
        self.save(&catalog)?;
        Ok(name)
    }

    /// Remove a name from a level and persist.
    fn remove(&self, level: &str, name: &str) -> Result<()> {
        let mut catalog = self.load()?;
        catalog.remove(level, name)?;
        self.save(&catalog)
    }

    /// Rename a name within a level and persist. Returns the trimmed new name.
    fn rename(&self, level: &str, old: &str, new: &str) -> Result<String> {
        let mut catalog = self.load()?;
        let name = catalog.rename(level, old, new)?;
        self.save(&catalog)?;
        Ok(name)
    }
}
