//! Application-scoped dataset cache: load once on first use, share read-only afterwards.
//! Handlers and CLI commands receive the cache explicitly (usually via `Arc`).

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};

use crate::data::country::{CountryLookup, IsoCountryRegistry};
use crate::data::loader::load_salaries;
use crate::error::DataLoadError;
use crate::table::SalaryTable;

#[derive(Debug)]
pub struct LoadedDataset {
    pub table: SalaryTable,
    pub loaded_at: DateTime<Utc>,
}

pub struct DatasetCache {
    path: PathBuf,
    lookup: Arc<dyn CountryLookup>,
    slot: OnceLock<Result<LoadedDataset, DataLoadError>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>, lookup: Arc<dyn CountryLookup>) -> Self {
        Self {
            path: path.into(),
            lookup,
            slot: OnceLock::new(),
        }
    }

    /// Cache over `path` enriched with the built-in ISO registry.
    pub fn with_iso_registry(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Arc::new(IsoCountryRegistry::new()))
    }

    /// Cache that is already initialized with `table`; nothing is read from disk.
    pub fn preloaded(table: SalaryTable) -> Self {
        Self {
            path: PathBuf::from("<memory>"),
            lookup: Arc::new(IsoCountryRegistry::new()),
            slot: OnceLock::from(Ok(LoadedDataset {
                table,
                loaded_at: Utc::now(),
            })),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded dataset. The first call performs the load; the outcome,
    /// including a failure, is kept for the lifetime of the cache.
    pub fn get(&self) -> Result<&LoadedDataset, &DataLoadError> {
        self.slot
            .get_or_init(|| {
                let outcome = load_salaries(&self.path, self.lookup.as_ref()).map(|table| {
                    LoadedDataset {
                        table,
                        loaded_at: Utc::now(),
                    }
                });
                if let Err(err) = &outcome {
                    tracing::error!(error = %err, "salary dataset failed to load");
                }
                outcome
            })
            .as_ref()
    }

    pub fn table(&self) -> Result<&SalaryTable, &DataLoadError> {
        self.get().map(|loaded| &loaded.table)
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl std::fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetCache")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
