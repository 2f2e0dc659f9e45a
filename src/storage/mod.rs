//! Storage module.
//!
//! Provides the snapshot-storage contract and its backends: in-memory,
//! JSON files, and SQLite.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod file;
pub mod memory;
pub mod sqlite;

pub use error::StorageError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use traits::{StorageBackend, collections, load_collection, save_collection};
