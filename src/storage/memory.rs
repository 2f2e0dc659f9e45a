//! In-memory storage backend.
//!
//! Holds collections in a mutex-guarded map. Used by the test suite and for
//! ephemeral stores; nothing survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::{StorageBackend, StorageError};

/// In-memory snapshot storage.
#[derive(Default)]
pub struct MemoryBackend {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let collections = self
            .collections
            .lock()
            .map_err(|e| StorageError::Database(format!("memory backend poisoned: {}", e)))?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn save(&self, collection: &str, records: &[Value]) -> Result<(), StorageError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|e| StorageError::Database(format!("memory backend poisoned: {}", e)))?;
        collections.insert(collection.to_string(), records.to_vec());
        Ok(())
    }
}
