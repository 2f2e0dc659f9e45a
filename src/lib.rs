//! Data store for a ship-maintenance dashboard.
//!
//! Ships, their installed components, and the maintenance jobs scheduled
//! against those components, kept consistent under CRUD with cascading
//! deletes, a notification log, and a login session. All persistence goes
//! through a [`storage::StorageBackend`] that reads and writes
//! whole-collection snapshots, so backends (in-memory, JSON files, SQLite)
//! are interchangeable.

pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use storage::{FileBackend, MemoryBackend, SqliteBackend, StorageBackend, StorageError};
pub use store::FleetStore;
