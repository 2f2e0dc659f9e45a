//! SQLite storage backend.
//!
//! Keeps the same whole-snapshot contract as the file backend: each
//! collection is a single row holding the collection as a JSON array.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;

use super::{StorageBackend, StorageError};

/// Snapshot storage backed by a SQLite database.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Open (or create) a SQLite-backed store at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open an in-memory SQLite store.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS collections (
                name TEXT PRIMARY KEY,
                data TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl StorageBackend for SqliteBackend {
    fn load(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Database(format!("sqlite backend poisoned: {}", e)))?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM collections WHERE name = ?1",
                params![collection],
                |row| row.get(0),
            )
            .optional()?;
        match data {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, collection: &str, records: &[Value]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Database(format!("sqlite backend poisoned: {}", e)))?;
        conn.execute(
            "INSERT INTO collections (name, data) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET data = excluded.data",
            params![collection, json],
        )?;
        Ok(())
    }
}
