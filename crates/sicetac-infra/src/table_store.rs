//! CSV-backed table store with an atomically swapped snapshot

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use sicetac_domain::model::TableSnapshot;
use sicetac_domain::repository::TableStore;
use sicetac_types::Result;

use crate::csv_tables::load_snapshot;

/// Lazily loads the lookup tables from a directory of CSV files and caches
/// them process-wide. `refresh` builds a complete new snapshot before
/// swapping it in, so concurrent readers never observe a partial mix.
pub struct CsvTableStore {
    data_dir: PathBuf,
    cached: RwLock<Option<Arc<TableSnapshot>>>,
}

impl CsvTableStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn cached_snapshot(&self) -> Option<Arc<TableSnapshot>> {
        let guard = self.cached.read().unwrap_or_else(|p| p.into_inner());
        guard.clone()
    }
}

impl TableStore for CsvTableStore {
    fn snapshot(&self) -> Result<Arc<TableSnapshot>> {
        self.refresh(false)
    }

    fn refresh(&self, force: bool) -> Result<Arc<TableSnapshot>> {
        if !force {
            if let Some(snapshot) = self.cached_snapshot() {
                return Ok(snapshot);
            }
        }
        // Build outside the lock; a failed load leaves the old snapshot
        let snapshot = Arc::new(load_snapshot(&self.data_dir)?);
        let mut guard = self.cached.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(snapshot.clone());
        Ok(snapshot)
    }
}
