//! Keyword list store implementations.

use super::catalog::RegionCatalog;
use super::KeywordListStore;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default file name of the region store.
pub const DEFAULT_REGIONS_FILE: &str = "china_regions.json";

/// Region catalog persisted as a pretty-printed UTF-8 JSON file.
///
/// Loading a missing file seeds it with [`RegionCatalog::default_china`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeywordListStore for JsonFileStore {
    fn load(&self) -> Result<RegionCatalog> {
        if !self.path.exists() {
            let catalog = RegionCatalog::default_china();
            log::info!(
                "Region store {} not found, seeding {} default names",
                self.path.display(),
                catalog.len()
            );
            self.save(&catalog)?;
            return Ok(catalog);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let catalog = RegionCatalog::from_json_str(&content).inspect_err(|e| {
            log::warn!("Failed to parse region store {}: {}", self.path.display(), e);
        })?;
        log::debug!("Loaded {} region names from {}", catalog.len(), self.path.display());
        Ok(catalog)
    }

    fn save(&self, catalog: &RegionCatalog) -> Result<()> {
        let json = serde_json::to_string_pretty(catalog)?;
        std::fs::write(&self.path, json)?;
        log::info!("Saved {} region names to {}", catalog.len(), self.path.display());
        Ok(())
    }
}

/// In-memory region catalog.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: Mutex<RegionCatalog>,
}

impl MemoryStore {
    /// Create a store holding `catalog`.
    pub fn new(catalog: RegionCatalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

impl KeywordListStore for MemoryStore {
    fn load(&self) -> Result<RegionCatalog> {
        let catalog = self.catalog.lock().unwrap_or_else(|e| e.into_inner());
        Ok(catalog.clone())
    }

    fn save(&self, catalog: &RegionCatalog) -> Result<()> {
        let mut stored = self.catalog.lock().unwrap_or_else(|e| e.into_inner());
        *stored = catalog.clone();
        Ok(())
    }
}
