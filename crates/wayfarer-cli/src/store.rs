//! File-backed storage collaborator.
//!
//! The dataset lives in `store.json` under its two logical keys
//! (`countryStatuses`, `visitDates`), visas in `visas.json`, and country
//! metadata in `catalog.json`. Absent files mean empty collections; the
//! engine itself never touches the filesystem.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wayfarer_engine::CountryCatalog;
use wayfarer_types::{Country, ExportDataset, VisaRecord};

const STORE_FILE: &str = "store.json";
const VISAS_FILE: &str = "visas.json";
const CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            root: data_dir.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_dataset(&self) -> Result<ExportDataset> {
        let path = self.root.join(STORE_FILE);
        if !path.exists() {
            return Ok(ExportDataset::new());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let dataset = serde_json::from_str(&content)
            .with_context(|| format!("invalid store file {}", path.display()))?;
        Ok(dataset)
    }

    pub fn save_dataset(&self, dataset: &ExportDataset) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(STORE_FILE);
        let content = serde_json::to_string_pretty(dataset)?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load_visas(&self) -> Result<Vec<VisaRecord>> {
        let path = self.root.join(VISAS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let visas = serde_json::from_str(&content)
            .with_context(|| format!("invalid visas file {}", path.display()))?;
        Ok(visas)
    }

    /// Load the country catalog, preferring the explicit override, then the
    /// configured path, then `catalog.json` in the data dir. A missing file
    /// yields an empty catalog; aggregation falls back to placeholders.
    pub fn load_catalog(&self, override_path: Option<&Path>) -> Result<CountryCatalog> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => self.root.join(CATALOG_FILE),
        };
        if !path.exists() {
            return Ok(CountryCatalog::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let countries: Vec<Country> = serde_json::from_str(&content)
            .with_context(|| format!("invalid catalog file {}", path.display()))?;
        Ok(CountryCatalog::new(countries))
    }

    /// Resolve a configured catalog path relative to the data directory.
    pub fn resolve_catalog_path(&self, configured: &Path) -> PathBuf {
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.root.join(configured)
        }
    }
}
