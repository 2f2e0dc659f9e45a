//! Storage trait definition for the snapshot backends.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::StorageError;

/// Collection names used by the store layer.
pub mod collections {
    pub const SHIPS: &str = "ships";
    pub const COMPONENTS: &str = "components";
    pub const JOBS: &str = "jobs";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const USERS: &str = "users";
    pub const CURRENT_USER: &str = "currentUser";
}

/// Storage backend over named record collections.
///
/// Collections are read and written as whole snapshots: `load` returns the
/// current records (empty if the collection was never written) and `save`
/// overwrites the collection. No transactional guarantees beyond "a single
/// save is atomic with respect to a later load".
pub trait StorageBackend: Send + Sync {
    /// Read the full contents of a collection. Absent collections are empty.
    fn load(&self, collection: &str) -> Result<Vec<Value>, StorageError>;

    /// Overwrite a collection with the given records.
    fn save(&self, collection: &str, records: &[Value]) -> Result<(), StorageError>;
}

/// Load a collection and decode every record into `T`.
pub fn load_collection<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    collection: &str,
) -> Result<Vec<T>, StorageError> {
    backend
        .load(collection)?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(StorageError::from))
        .collect()
}

/// Encode records and overwrite a collection with them.
pub fn save_collection<T: Serialize>(
    backend: &dyn StorageBackend,
    collection: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    backend.save(collection, &values)
}
