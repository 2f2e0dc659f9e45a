//! File-based storage backend.
//!
//! One `<collection>.json` file per collection under a data directory,
//! holding the whole collection as a JSON array. This is the local-storage
//! analogue the dashboard originally persisted to.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{StorageBackend, StorageError};

/// Snapshot storage backed by JSON files in a directory.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Open a file backend rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        let records = serde_json::from_str(&contents)?;
        Ok(records)
    }

    fn save(&self, collection: &str, records: &[Value]) -> Result<(), StorageError> {
        let path = self.collection_path(collection);
        let contents = serde_json::to_string_pretty(records)?;
        // Write-then-rename: a partial write never replaces the snapshot.
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", collection));
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &path)?;
        debug!(collection, records = records.len(), "saved collection snapshot");
        Ok(())
    }
}
